use crate::{EngineEvent, EventHandler};
use verdant_core::{Chromosome, Phenotype, Score, TimeStatistic};
use std::fmt::{Debug, Display};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A listener that aggregates phase timings and run results into the text
/// report of the engine. Clone the summary, subscribe one copy, and read
/// `report()` (or `Display`) after the run:
///
/// ```ignore
/// let summary = Summary::new();
/// let mut engine = GeneticEngine::builder()
///     .subscribe(summary.clone())
///     /* ... */
///     .build();
/// engine.evolve().unwrap();
/// println!("{summary}");
/// ```
pub struct Summary<C: Chromosome> {
    inner: Arc<Mutex<SummaryInner<C>>>,
}

struct SummaryInner<C: Chromosome> {
    initialization: TimeStatistic,
    evaluation: TimeStatistic,
    parent_selection: TimeStatistic,
    survivor_selection: TimeStatistic,
    alteration: TimeStatistic,
    started_at: Option<Instant>,
    total: Duration,
    generations: usize,
    last_improvement: usize,
    score: Option<Score>,
    best: Option<Phenotype<C>>,
}

impl<C: Chromosome> Summary<C> {
    pub fn new() -> Self {
        Summary {
            inner: Arc::new(Mutex::new(SummaryInner {
                initialization: TimeStatistic::default(),
                evaluation: TimeStatistic::default(),
                parent_selection: TimeStatistic::default(),
                survivor_selection: TimeStatistic::default(),
                alteration: TimeStatistic::default(),
                started_at: None,
                total: Duration::ZERO,
                generations: 0,
                last_improvement: 0,
                score: None,
                best: None,
            })),
        }
    }

    pub fn generations(&self) -> usize {
        self.inner.lock().unwrap().generations
    }

    pub fn score(&self) -> Option<Score> {
        self.inner.lock().unwrap().score
    }

    /// Render the report. The layout is deterministic: fixed sections with
    /// labeled rows, times in milliseconds.
    pub fn report(&self) -> String
    where
        C: Debug,
    {
        let inner = self.inner.lock().unwrap();

        let mut out = String::new();

        out.push_str("=== Initialization =========================\n");
        out.push_str(&format!(
            "  Time: {:.3} ms\n",
            millis(inner.initialization.sum())
        ));

        out.push_str("=== Evaluation Times =======================\n");
        out.push_str(&section(&inner.evaluation));

        out.push_str("=== Selection Times ========================\n");
        out.push_str("  Offspring:\n");
        out.push_str(&indented_section(&inner.parent_selection));
        out.push_str("  Survivors:\n");
        out.push_str(&indented_section(&inner.survivor_selection));

        out.push_str("=== Alteration Times =======================\n");
        out.push_str(&section(&inner.alteration));

        out.push_str("=== Evolution Results ======================\n");
        out.push_str(&format!("  Total time: {:.3} ms\n", millis(inner.total)));
        out.push_str(&format!(
            "  Generation time: {:.3} ms\n",
            if inner.generations == 0 {
                0.0
            } else {
                millis(inner.total) / inner.generations as f64
            }
        ));
        out.push_str(&format!("  Generations: {}\n", inner.generations));
        out.push_str(&format!(
            "  Steady generations: {}\n",
            inner.generations.saturating_sub(inner.last_improvement)
        ));
        match &inner.best {
            Some(best) => out.push_str(&format!("  Fittest: {:?}\n", best.genotype())),
            None => out.push_str("  Fittest: <none>\n"),
        }
        match &inner.score {
            Some(score) => out.push_str(&format!("  Best fitness: {}\n", score)),
            None => out.push_str("  Best fitness: <none>\n"),
        }

        out
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}

fn section(statistic: &TimeStatistic) -> String {
    format!(
        "  Average: {:.3} ms, Max: {:.3} ms, Min: {:.3} ms\n",
        millis(statistic.mean()),
        millis(statistic.max()),
        millis(statistic.min()),
    )
}

fn indented_section(statistic: &TimeStatistic) -> String {
    format!(
        "    Average: {:.3} ms, Max: {:.3} ms, Min: {:.3} ms\n",
        millis(statistic.mean()),
        millis(statistic.max()),
        millis(statistic.min()),
    )
}

impl<C: Chromosome> Clone for Summary<C> {
    fn clone(&self) -> Self {
        Summary {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Chromosome> Default for Summary<C> {
    fn default() -> Self {
        Summary::new()
    }
}

impl<C: Chromosome + Debug> Display for Summary<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report())
    }
}

impl<C: Chromosome> EventHandler<C> for Summary<C> {
    fn on_event(&mut self, event: &EngineEvent<C>) {
        let mut inner = self.inner.lock().unwrap();

        match event {
            EngineEvent::Start => {
                inner.started_at = Some(Instant::now());
            }
            EngineEvent::InitializationEnd(elapsed) => {
                inner.initialization.add(*elapsed);
            }
            EngineEvent::EvaluationEnd { elapsed, .. } => {
                inner.evaluation.add(*elapsed);
            }
            EngineEvent::ParentSelectionEnd(elapsed) => {
                inner.parent_selection.add(*elapsed);
            }
            EngineEvent::SurvivorSelectionEnd(elapsed) => {
                inner.survivor_selection.add(*elapsed);
            }
            EngineEvent::AlterationEnd(elapsed) => {
                inner.alteration.add(*elapsed);
            }
            EngineEvent::Improvement { generation, .. } => {
                inner.last_improvement = *generation + 1;
            }
            EngineEvent::GenerationEnd { generation, score } => {
                inner.generations = *generation;
                inner.score = *score;
            }
            EngineEvent::Stop {
                generation,
                score,
                best,
                ..
            } => {
                inner.generations = *generation;
                inner.score = *score;
                inner.best = best.clone();
                if let Some(started_at) = inner.started_at {
                    inner.total = started_at.elapsed();
                }
            }
            _ => {}
        }
    }
}
