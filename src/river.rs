//! The Homer / baby / dog / poison river-crossing puzzle.
//!
//! Homer must ferry the baby, the dog and the poison from the east bank to the
//! west bank. The boat holds Homer and at most one passenger, and only Homer
//! can row. The baby may never be left on a bank without Homer while the dog
//! or the poison is on that same bank.

use std::fmt;

use crate::solver::SearchProblem;

/// Which bank each entity is on: `true` for west, `false` for east.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RiverState {
    pub homer: bool,
    pub baby: bool,
    pub dog: bool,
    pub poison: bool,
}

/// One boat trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Homer rows alone.
    Homer,
    /// Homer takes the baby.
    Baby,
    /// Homer takes the dog.
    Dog,
    /// Homer takes the poison.
    Poison,
}

impl Crossing {
    /// All crossings in the order successors are generated.
    pub const ALL: [Crossing; 4] = [
        Crossing::Homer,
        Crossing::Baby,
        Crossing::Dog,
        Crossing::Poison,
    ];
}

impl RiverState {
    /// Everyone on the east bank.
    pub fn initial() -> Self {
        RiverState::default()
    }

    /// Everyone on the west bank.
    pub fn goal() -> Self {
        RiverState {
            homer: true,
            baby: true,
            dog: true,
            poison: true,
        }
    }

    pub fn is_final(&self) -> bool {
        *self == RiverState::goal()
    }

    /// Whether nobody is in danger.
    pub fn is_safe(&self) -> bool {
        let baby_alone = self.baby != self.homer;
        !(baby_alone && (self.dog == self.baby || self.poison == self.baby))
    }

    /// Applies `crossing`, or returns `None` if the passenger is on the other
    /// bank or the result is unsafe.
    pub fn next_state(&self, crossing: Crossing) -> Option<RiverState> {
        let mut next = *self;
        next.homer = !self.homer;
        match crossing {
            Crossing::Homer => {}
            Crossing::Baby if self.baby == self.homer => next.baby = !self.baby,
            Crossing::Dog if self.dog == self.homer => next.dog = !self.dog,
            Crossing::Poison if self.poison == self.homer => next.poison = !self.poison,
            _ => return None,
        }
        next.is_safe().then_some(next)
    }

    /// Every legal state one crossing away.
    pub fn successors(&self) -> Vec<RiverState> {
        Crossing::ALL
            .iter()
            .filter_map(|&c| self.next_state(c))
            .collect()
    }

    /// Passengers still on the east bank.
    ///
    /// Each crossing carries at most one passenger west, so this never
    /// overestimates and never drops by more than one per step.
    pub fn cargo_remaining(&self) -> u32 {
        [self.baby, self.dog, self.poison]
            .iter()
            .filter(|&&west| !west)
            .count() as u32
    }

    /// The crossing that leads from this state to `next`, if any.
    pub fn crossing_to(&self, next: &RiverState) -> Option<Crossing> {
        Crossing::ALL
            .iter()
            .copied()
            .find(|&c| self.next_state(c).as_ref() == Some(next))
    }
}

impl fmt::Display for RiverState {
    /// `west | east` listing, e.g. `H B | D P`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            ('H', self.homer),
            ('B', self.baby),
            ('D', self.dog),
            ('P', self.poison),
        ];
        let side = |west: bool| -> String {
            names
                .iter()
                .filter(|(_, w)| *w == west)
                .map(|(n, _)| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "{} | {}", side(true), side(false))
    }
}

/// The puzzle as a search problem.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiverCrossing {
    pub start: RiverState,
}

impl SearchProblem for RiverCrossing {
    type State = RiverState;

    fn start(&self) -> RiverState {
        self.start
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        state.is_final()
    }

    fn successors(&self, state: &RiverState) -> Vec<RiverState> {
        state.successors()
    }

    fn heuristic(&self, state: &RiverState) -> f64 {
        f64::from(state.cargo_remaining())
    }
}
