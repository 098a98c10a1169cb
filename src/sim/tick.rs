//! Fixed-tick simulation step
//!
//! One `tick` advances both layouts of a level by one step from one
//! shared input snapshot. The caller owns the clock; determinism is per
//! tick, so the same starting state fed the same input sequence always
//! lands in the same final state.

use super::collision::{impaled, reached_exit, resolve_obstacle};
use super::state::{Layout, Level};

/// Held-key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// What one layout's step produced
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// The avatar hit spikes this step
    pub impaled: bool,
    /// The avatar reached an exit this step
    pub exited: bool,
}

/// What one level tick produced
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// A death restarted the level mid-tick
    pub restarted: bool,
    /// Both layouts stand beaten at the end of this tick
    pub completed: bool,
}

/// Advance one layout by one step.
///
/// Order matters and is fixed: horizontal intent, jump, gravity, motion
/// integration, obstacle resolution in authoring order, hazard checks,
/// exit checks. An impalement ends the step immediately; the restart it
/// triggers voids any exit progress in the same tick anyway.
pub fn step_layout(layout: &mut Layout, input: &TickInput) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    let avatar = &mut layout.avatar;

    // Horizontal intent replaces x velocity wholesale; opposite keys cancel.
    avatar.vel.x = if input.move_right && !input.move_left {
        avatar.run_speed()
    } else if input.move_left && !input.move_right {
        -avatar.run_speed()
    } else {
        0.0
    };

    if input.jump && !avatar.in_air {
        avatar.vel.y = avatar.jump_impulse();
    }

    avatar.apply_gravity();
    let bounds = layout.bounds();
    layout.avatar.integrate(bounds);

    for tile in &layout.obstacles {
        resolve_obstacle(&mut layout.avatar, &tile.rect);
    }

    for spikes in &layout.hazards {
        if impaled(&layout.avatar, spikes) {
            outcome.impaled = true;
            return outcome;
        }
    }

    for exit in &layout.exits {
        if reached_exit(&layout.avatar, exit) {
            layout.beaten = true;
            outcome.exited = true;
            break;
        }
    }

    outcome
}

/// Advance the whole level by one tick: the main layout first, then the
/// alternate, each skipped once beaten. A death bumps the counter and
/// restarts the level immediately, so a layout stepped after a restart
/// runs from its spawn within the same tick.
pub fn tick(level: &mut Level, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    if !level.main.beaten {
        let outcome = step_layout(&mut level.main, input);
        if outcome.impaled {
            level.deaths += 1;
            level.restart();
            report.restarted = true;
        }
    }

    if !level.alt.beaten {
        let outcome = step_layout(&mut level.alt, input);
        if outcome.impaled {
            level.deaths += 1;
            level.restart();
            report.restarted = true;
        }
    }

    report.completed = level.completed();
    report
}
