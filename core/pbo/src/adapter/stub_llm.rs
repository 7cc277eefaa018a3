//! テスト用: 固定の応答（または固定のエラー）を返す LlmCompletion 実装

#[cfg(test)]
mod stub {
    use common::error::Error;
    use std::cell::RefCell;

    use crate::ports::outbound::LlmCompletion;

    /// テスト用: 固定の応答を返し、受け取ったプロンプトを記録する Stub
    pub struct StubLlm {
        reply: Result<String, Error>,
        pub(crate) calls: RefCell<Vec<(String, String)>>,
    }

    impl StubLlm {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(err: Error) -> Self {
            Self {
                reply: Err(err),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl LlmCompletion for StubLlm {
        fn complete(&self, system_instruction: &str, user_message: &str) -> Result<String, Error> {
            self.calls
                .borrow_mut()
                .push((system_instruction.to_string(), user_message.to_string()));
            self.reply.clone()
        }

        fn model(&self) -> &str {
            "stub"
        }
    }
}

#[cfg(test)]
pub use stub::StubLlm;
