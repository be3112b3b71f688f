// SPDX-License-Identifier: MPL-2.0
//! Play/pause flag. There is no renderer yet, so nothing else moves.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    is_playing: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlaybackChanged(bool),
}

impl State {
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                self.is_playing = !self.is_playing;
                Effect::PlaybackChanged(self.is_playing)
            }
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
}
