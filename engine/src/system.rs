//! The rewriting system composition root.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use tangle_causal::CausalGraph;
use tangle_core::{vertex_union, Hyperedge, Rule};
use tangle_graph::Hypergraph;

use crate::config::RunConfig;
use crate::delta::RuleDelta;
use crate::error::{EngineError, EngineResult};
use crate::scheduler::{run_slice, SliceEnd};
use crate::state::RunState;

/// Lifecycle phase of the system.
///
/// `Running` covers the pauses between slices; the system is only ever
/// mid-round inside a `tick` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Outcome of one `tick`.
///
/// `Progress` is the per-slice progress notification: its cumulative event
/// count never decreases across slices. The `Running -> Finished`
/// transition is reported exactly once as work completes; ticking a
/// finished system just restates the terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOutcome {
    /// No run is active.
    Idle,
    /// The slice yielded with work remaining.
    Progress {
        /// Cumulative applied events.
        events: u64,
    },
    /// The run terminated: matches exhausted or budget reached.
    Finished {
        /// Final applied event count.
        events: u64,
    },
}

/// Read-only snapshot of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Completed find-order-process rounds.
    pub steps: u64,
    /// Applied events so far.
    pub events_applied: u64,
    /// Cumulative wall-clock time spent inside slices.
    pub processing: Duration,
}

/// The rewriting system: owns the hypergraph, the causal graph, the rule
/// set, and the run lifecycle.
///
/// `run` seeds a fresh run and returns immediately; the host then drives
/// the system by calling `tick` (one bounded slice per call) from
/// whatever scheduler it has, or hands control to `drive`, which loops
/// `tick` with a sleep between slices. `cancel` and `status` are intended
/// for the gaps between slices.
#[derive(Debug)]
pub struct RewritingSystem {
    graph: Hypergraph,
    causal: CausalGraph,
    rules: Vec<Rule>,
    deltas: Vec<RuleDelta>,
    config: RunConfig,
    state: RunState,
    phase: Phase,
    rng: StdRng,
    processing: Duration,
}

impl Default for RewritingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RewritingSystem {
    /// Create an idle system.
    pub fn new() -> Self {
        Self {
            graph: Hypergraph::new(),
            causal: CausalGraph::new(),
            rules: Vec::new(),
            deltas: Vec::new(),
            config: RunConfig::default(),
            state: RunState::new(0),
            phase: Phase::Idle,
            rng: StdRng::from_entropy(),
            processing: Duration::ZERO,
        }
    }

    /// Start a fresh run.
    ///
    /// Both stores are cleared and reseeded: the graph receives `initial`
    /// as one bulk delta, the causal graph one seed event consuming
    /// nothing and producing the deduplicated sorted vertex set of
    /// `initial`. Returns immediately; no rounds execute until the first
    /// `tick`.
    ///
    /// Rules are validated up front: every rule needs a non-empty
    /// left-hand side anchored on a pattern of non-zero arity. This is
    /// the only error path; everything after seeding is a data condition.
    pub fn run(
        &mut self,
        rules: Vec<Rule>,
        initial: Vec<Hyperedge>,
        config: RunConfig,
    ) -> EngineResult<()> {
        Self::validate(&rules)?;

        self.graph.reset();
        self.causal.reset();
        self.processing = Duration::ZERO;
        self.state = RunState::new(config.max_events);
        self.rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.deltas = rules.iter().map(RuleDelta::factor).collect();

        self.graph.apply_delta(&[], &initial);
        self.causal.record_event(Vec::new(), vertex_union(&initial), 0);

        debug!(
            rules = rules.len(),
            initial_edges = initial.len(),
            max_events = config.max_events,
            "run seeded"
        );

        self.rules = rules;
        self.config = config;
        self.phase = Phase::Running;
        Ok(())
    }

    fn validate(rules: &[Rule]) -> EngineResult<()> {
        for (rule_index, rule) in rules.iter().enumerate() {
            match rule.lhs.first() {
                None => return Err(EngineError::empty_left_hand_side(rule_index)),
                Some(anchor) if anchor.arity() == 0 => {
                    return Err(EngineError::zero_arity_anchor(rule_index))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Execute one cooperative slice.
    pub fn tick(&mut self) -> SliceOutcome {
        match self.phase {
            Phase::Idle => SliceOutcome::Idle,
            Phase::Finished => SliceOutcome::Finished {
                events: self.state.events_applied,
            },
            Phase::Running => {
                let started = Instant::now();
                let end = run_slice(
                    &mut self.graph,
                    &mut self.causal,
                    &self.rules,
                    &self.deltas,
                    &self.config,
                    &mut self.state,
                    &mut self.rng,
                );
                self.processing += started.elapsed();

                let events = self.state.events_applied;
                match end {
                    SliceEnd::Yielded => {
                        trace!(step = self.state.step, events, "slice yielded");
                        SliceOutcome::Progress { events }
                    }
                    SliceEnd::Exhausted | SliceEnd::BudgetReached => {
                        self.phase = Phase::Finished;
                        debug!(
                            steps = self.state.step,
                            events,
                            exhausted = self.state.exhausted,
                            "run finished"
                        );
                        SliceOutcome::Finished { events }
                    }
                }
            }
        }
    }

    /// Drive the run to completion on the current thread.
    ///
    /// Sleeps `resume_delay` between slices, which is the bundled
    /// realization of the inter-slice yield; hosts needing a different
    /// suspension mechanism call `tick` themselves.
    pub fn drive(&mut self) -> RunStatus {
        loop {
            match self.tick() {
                SliceOutcome::Progress { .. } => std::thread::sleep(self.config.resume_delay),
                SliceOutcome::Idle | SliceOutcome::Finished { .. } => break,
            }
        }
        self.status()
    }

    /// Request a graceful stop: the remaining event budget drops to zero.
    ///
    /// Takes effect at the next event-count check; a slice already in
    /// flight (there is none between ticks) is never interrupted
    /// mid-application.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.state.max_events = self.state.events_applied;
        }
    }

    /// Read-only snapshot of the run.
    pub fn status(&self) -> RunStatus {
        RunStatus {
            phase: self.phase,
            steps: self.state.step,
            events_applied: self.state.events_applied,
            processing: self.processing,
        }
    }

    /// The hypergraph, for inspection between slices or after a run.
    pub fn graph(&self) -> &Hypergraph {
        &self.graph
    }

    /// The causal graph, for inspection between slices or after a run.
    pub fn causal(&self) -> &CausalGraph {
        &self.causal
    }
}
