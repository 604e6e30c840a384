use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::connector::server::{build_app, serve};

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn serve(&self, port: u16, public: bool) -> Result<String> {
        let ip = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        let listener = TcpListener::bind(SocketAddr::new(ip, port)).await?;

        info!(
            "Completions via {} (memory window {})",
            self.container.model_name(),
            self.container.memory_window()
        );

        serve(listener, build_app(self.container.app_state())).await?;
        Ok("Server stopped.".to_string())
    }
}
