//! Board entities: stationary nodes and player-placed pulses
//!
//! Entities are a closed set, so they're a tagged enum rather than trait
//! objects. Drawing lives in `renderer::Draw`; this module only holds state.

use glam::Vec2;
use crate::beat_wave;
use crate::consts::PULSE_LIFETIME;

/// A fixed target that lights up once a pulse reaches it on the beat
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pos: Vec2,
    active: bool,
}

impl Node {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, active: false }
    }

    /// Activation is decided centrally in `tick`, so there's nothing to do
    /// per node here.
    pub fn update(&mut self, _dt: f32, _beat_phase: f32) {}

    /// Latch the node on. There is no way back short of a board reset.
    pub fn activate(&mut self) {
        self.active = true;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// A player-placed emitter that pulses with the beat and fades after a while
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    pos: Vec2,
    /// Seconds alive (only advances while playing)
    timer: f32,
    /// Visual scale, follows the shared beat phase
    scale: f32,
    /// Still drawn? Expired pulses keep their cell and still count for
    /// activation through the pulse position list.
    active: bool,
}

impl Pulse {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            timer: 0.0,
            scale: 1.0,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32, beat_phase: f32) {
        self.timer += dt;
        self.scale = 1.0 + 0.5 * beat_wave(beat_phase);
        self.active = self.timer < PULSE_LIFETIME;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Anything that can occupy a grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Node(Node),
    Pulse(Pulse),
}

impl Entity {
    /// Advance one tick. Entities never look at each other, so call order
    /// within a tick doesn't matter.
    pub fn update(&mut self, dt: f32, beat_phase: f32) {
        match self {
            Entity::Node(node) => node.update(dt, beat_phase),
            Entity::Pulse(pulse) => pulse.update(dt, beat_phase),
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Entity::Node(node) => node.position(),
            Entity::Pulse(pulse) => pulse.position(),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Entity::Node(node) => node.is_active(),
            Entity::Pulse(pulse) => pulse.is_active(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Pulse(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Pulse(_) => None,
        }
    }

    pub fn as_pulse(&self) -> Option<&Pulse> {
        match self {
            Entity::Pulse(pulse) => Some(pulse),
            Entity::Node(_) => None,
        }
    }
}
