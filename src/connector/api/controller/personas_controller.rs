use anyhow::Result;

use crate::ConversationType;

pub struct PersonasController;

impl PersonasController {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> Result<String> {
        Ok(self.format_personas())
    }

    fn format_personas(&self) -> String {
        let mut output = String::from("Conversation types:\n");

        for kind in ConversationType::ALL {
            let config = kind.config();
            output.push_str(&format!(
                "\n  {}\n    Temperature: {}, Max tokens: {}\n    Prompt: {}\n",
                config.type_tag, config.temperature, config.max_tokens, config.system_prompt
            ));
        }

        output
    }
}

impl Default for PersonasController {
    fn default() -> Self {
        Self::new()
    }
}
