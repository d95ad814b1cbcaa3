pub mod events;

use crossbeam_channel::{unbounded, Receiver, Sender};

use self::events::PointerSample;

/// Hands drag samples from the host's UI thread to the game loop.
pub struct PointerQueue {
    sender: Sender<PointerSample>,
    receiver: Receiver<PointerSample>,
}

impl PointerQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Pushes a sample. Safe from any thread.
    pub fn push(&self, sample: PointerSample) {
        let _ = self.sender.send(sample);
    }

    /// Pops the oldest pending sample. Non-blocking; None when empty.
    pub fn pop(&self) -> Option<PointerSample> {
        self.receiver.try_recv().ok()
    }

    /// A clone of the sender, for handing to the producing thread.
    pub fn sender(&self) -> Sender<PointerSample> {
        self.sender.clone()
    }

    /// Moves every pending sample into `out`, preserving arrival order.
    pub fn drain_into(&self, out: &mut Vec<PointerSample>) {
        while let Ok(sample) = self.receiver.try_recv() {
            out.push(sample);
        }
    }
}

impl Default for PointerQueue {
    fn default() -> Self {
        Self::new()
    }
}
