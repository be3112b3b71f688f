// SPDX-License-Identifier: MPL-2.0
//! Auto-rotate flag.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    auto_rotate: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_AUTO_ROTATE)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    AutoRotateChanged(bool),
}

impl State {
    #[must_use]
    pub fn new(auto_rotate: bool) -> Self {
        Self { auto_rotate }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                self.auto_rotate = !self.auto_rotate;
                Effect::AutoRotateChanged(self.auto_rotate)
            }
        }
    }

    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }
}
