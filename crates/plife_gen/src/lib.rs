use plife_core::{Recipe, RecipeConfig, RecipeStep};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Resolve the seed a generation run will use: the configured one, or a
/// fresh draw from the process RNG. Callers can log the result to make an
/// unseeded run reproducible after the fact.
pub fn resolve_seed(config: &RecipeConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Generate a recipe, seeding a dedicated RNG from the config
pub fn generate(config: &RecipeConfig) -> Recipe {
    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(config));
    generate_with(config, &mut rng)
}

/// Generate a recipe from an explicit random source.
///
/// Emission order: window, friction, one particles directive per color,
/// then one rule per ordered color pair (outer color1, inner color2).
/// Each rule draws first_cut, last_cut, peak in that order. Every draw is
/// an independent uniform sample over inclusive bounds; the last cutoff is
/// drawn from the window anchored at the first-cutoff lower bound, so it
/// may land below the first cutoff.
pub fn generate_with(config: &RecipeConfig, rng: &mut impl Rng) -> Recipe {
    let n = config.colors.len();
    let mut steps = Vec::with_capacity(2 + n + n * n);

    let (width, height) = config.window_size;
    steps.push(RecipeStep::Window { width, height });

    let (friction_low, friction_high) = config.friction_range;
    steps.push(RecipeStep::Friction(
        rng.gen_range(friction_low..=friction_high),
    ));

    for &color in &config.colors {
        steps.push(RecipeStep::Particles {
            color,
            amount: config.particles_per_color,
        });
    }

    let (first_low, first_high) = config.first_cut_range;
    let (last_low, last_high) = config.last_cut_range();
    let (peak_low, peak_high) = config.peak_range;

    for &color1 in &config.colors {
        for &color2 in &config.colors {
            let first_cut = rng.gen_range(first_low..=first_high);
            let last_cut = rng.gen_range(last_low..=last_high);
            let peak = rng.gen_range(peak_low..=peak_high);
            steps.push(RecipeStep::Rule {
                color1,
                color2,
                first_cut,
                last_cut,
                peak,
            });
        }
    }

    Recipe { steps }
}
