//! Damped spring driving the cursor dot's snap and size animations.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Frames longer than this (tab switches, breakpoints) are clamped.
const MAX_FRAME_SECS: f64 = 1.0 / 20.0;
const SUBSTEP_SECS: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Places the spring at rest on `value`.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
    }

    /// Integrates `dt` seconds toward `target` (semi-implicit Euler).
    pub fn advance(&mut self, target: f64, dt: f64) -> f64 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let force = -stiffness * (self.value - target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }
}
