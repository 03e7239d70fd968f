use verdant_core::{Chromosome, MetricSet, Phenotype, Score};
use std::time::Duration;

/// The life-cycle events published by the engine, in the order a listener
/// observes them: `Start` once, then per generation `GenerationStart`,
/// the phase bracket events (`Initialization*` on the first generation,
/// `Evaluation*`, `ParentSelection*`, `SurvivorSelection*`, `Alteration*`,
/// `Evaluation*` again), `Improvement` when the best score moved, and
/// `GenerationEnd`; finally `Stop` once.
///
/// Events are immutable snapshots. Handlers observe but never alter engine
/// state.
pub enum EngineEvent<C: Chromosome> {
    Start,
    Stop {
        generation: usize,
        score: Option<Score>,
        best: Option<Phenotype<C>>,
        metrics: MetricSet,
    },
    GenerationStart(usize),
    GenerationEnd {
        generation: usize,
        score: Option<Score>,
    },
    InitializationStart,
    InitializationEnd(Duration),
    EvaluationStart(usize),
    EvaluationEnd {
        count: usize,
        elapsed: Duration,
    },
    ParentSelectionStart,
    ParentSelectionEnd(Duration),
    SurvivorSelectionStart,
    SurvivorSelectionEnd(Duration),
    AlterationStart,
    AlterationEnd(Duration),
    Improvement {
        generation: usize,
        score: Score,
    },
}

impl<C: Chromosome> EngineEvent<C> {
    /// A short stable label for logs and dispatch tables.
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Start => "start",
            EngineEvent::Stop { .. } => "stop",
            EngineEvent::GenerationStart(_) => "generation_start",
            EngineEvent::GenerationEnd { .. } => "generation_end",
            EngineEvent::InitializationStart => "initialization_start",
            EngineEvent::InitializationEnd(_) => "initialization_end",
            EngineEvent::EvaluationStart(_) => "evaluation_start",
            EngineEvent::EvaluationEnd { .. } => "evaluation_end",
            EngineEvent::ParentSelectionStart => "parent_selection_start",
            EngineEvent::ParentSelectionEnd(_) => "parent_selection_end",
            EngineEvent::SurvivorSelectionStart => "survivor_selection_start",
            EngineEvent::SurvivorSelectionEnd(_) => "survivor_selection_end",
            EngineEvent::AlterationStart => "alteration_start",
            EngineEvent::AlterationEnd(_) => "alteration_end",
            EngineEvent::Improvement { .. } => "improvement",
        }
    }
}
