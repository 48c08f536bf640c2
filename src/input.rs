use std::collections::VecDeque;

/// Discrete events the driving loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Close,
    /// Left mouse button, in viewport coordinates (top-left origin, y down).
    LeftClick { x: i32, y: i32 },
}

pub trait InputSource {
    /// Called once before the events of `frame` are polled.
    fn begin_frame(&mut self, _frame: u64) {}

    /// Next pending event, or `None` once this frame's events are drained.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// Replays events at fixed frame numbers.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    // Sorted by frame; consumed from the front.
    script: VecDeque<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<(u64, InputEvent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            script: script.into(),
            frame: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn begin_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.script.front() {
            Some(&(at, event)) if at <= self.frame => {
                self.script.pop_front();
                Some(event)
            }
            _ => None,
        }
    }
}
