use std::io::Write;

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{ChatSession, ConversationType};

use super::super::Container;

pub const GREETING: &str = "Hi, I am a ChatBot. How can I help you?";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, url: String, conversation_type: String) -> Result<String> {
        let conversation_type: ConversationType = conversation_type.parse().map_err(|e| {
            let known: Vec<_> = ConversationType::ALL.iter().map(|k| k.as_str()).collect();
            anyhow!("{} (expected one of: {})", e, known.join(", "))
        })?;

        let mut session =
            ChatSession::new(self.container.answer_transport(&url), conversation_type);

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        run_chat(&mut session, stdin, &mut stdout).await?;

        Ok(String::new())
    }
}

/// Terminal chat loop: one line of input is one user turn; replies are printed with their
/// speaker label. Returns at end of input.
pub async fn run_chat<R, W>(session: &mut ChatSession, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "This is a general conversation. You can ask me anything.")?;
    writeln!(output, "Bot: {}", GREETING)?;
    output.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches('\r');
        if let Some(reply) = session.submit(line).await {
            writeln!(output, "{}", reply.display_line())?;
            output.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::application::AnswerTransport;
    use crate::domain::{AnswerRequest, CompletionChoice, DomainError, Message, ResponseEnvelope};

    struct EchoTransport;

    #[async_trait]
    impl AnswerTransport for EchoTransport {
        async fn send(&self, request: &AnswerRequest) -> Result<ResponseEnvelope, DomainError> {
            let last = request.messages.last().map(|m| m.content().to_string());
            Ok(ResponseEnvelope::ok(CompletionChoice::new(Message::assistant(
                last.unwrap_or_default().to_uppercase(),
            ))))
        }
    }

    #[tokio::test]
    async fn prints_greeting_and_replies() {
        let mut session = ChatSession::new(Arc::new(EchoTransport), ConversationType::MichaelScott);
        let input: &[u8] = b"hello\n\nhow are you\n";
        let mut output = Vec::new();

        run_chat(&mut session, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Bot: Hi, I am a ChatBot. How can I help you?");
        assert_eq!(lines[2], "Bot: HELLO");
        assert_eq!(lines[3], "Bot: HOW ARE YOU");
        assert_eq!(lines.len(), 4);
        assert_eq!(session.history().len(), 4);
    }
}
