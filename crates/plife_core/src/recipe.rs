use std::fmt;

use crate::color::ParticleColor;

/// Comment line opening every generated recipe file
pub const GENERATED_HEADER: &str = "# randomly generated";

/// One directive of a recipe file
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeStep {
    /// Board dimensions; a recipe has exactly one
    Window { width: u32, height: u32 },
    /// Velocity damping applied to every particle
    Friction(f64),
    /// Particle count spawned for one color
    Particles { color: ParticleColor, amount: u32 },
    /// Interaction of color1 particles with color2 particles.
    /// Directional: (a, b) and (b, a) are separate rules.
    Rule {
        color1: ParticleColor,
        color2: ParticleColor,
        first_cut: f64,
        last_cut: f64,
        peak: f64,
    },
}

impl fmt::Display for RecipeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window { width, height } => write!(f, "window {width} {height}"),
            Self::Friction(value) => write!(f, "friction {value}"),
            Self::Particles { color, amount } => write!(f, "particles {color} {amount}"),
            Self::Rule {
                color1,
                color2,
                first_cut,
                last_cut,
                peak,
            } => write!(f, "rule {color1} {color2} {first_cut} {last_cut} {peak}"),
        }
    }
}

/// A complete generated scenario: directives in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    /// Render the recipe file body: header comment, blank line, then one
    /// directive per line. Every line is newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::from(GENERATED_HEADER);
        out.push_str("\n\n");
        for step in &self.steps {
            out.push_str(&step.to_string());
            out.push('\n');
        }
        out
    }
}
