use super::evolution_engine::ProgressCallback;

/// Reports optimizer progress through the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize, population_size: usize) {
        log::trace!(
            "Generation {} starting with {} candidates",
            generation + 1,
            population_size
        );
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        log::debug!(
            "Generation {} complete. Best fitness: {:.4}",
            generation + 1,
            best_fitness
        );
    }
}

// For callers that watch a run from another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart { generation: usize, population_size: usize },
    GenerationComplete { generation: usize, best_fitness: f64 },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize, population_size: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart {
            generation,
            population_size,
        });
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
        });
    }
}
