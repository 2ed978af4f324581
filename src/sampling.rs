//! The randomized draws that make the synthetic history look lived-in.
//! Every sampler takes the run's RNG explicitly so a `--seed` run is
//! fully reproducible.

use crate::library::Route;
use crate::sink::Usage;
use chrono::Duration;
use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand_distr::Beta;

/// Which workflow handles a thread: data lookups dominate real support
/// traffic, small talk trails.
pub fn pick_route(rng: &mut impl Rng) -> Route {
    const ROUTES: [Route; 3] = [Route::Database, Route::Policy, Route::Chat];
    let weights = WeightedIndex::new([50u32, 35, 15]).expect("static route weights");
    ROUTES[weights.sample(rng)]
}

/// Turns per thread, favoring short conversations.
pub fn turn_count(rng: &mut impl Rng) -> usize {
    let weights = WeightedIndex::new([40u32, 25, 18, 10, 7]).expect("static turn weights");
    weights.sample(rng) + 1
}

/// How far back a thread starts, in fractional days. Beta(2, 5) clusters
/// threads near the present with a long tail toward the window's start.
pub fn days_ago(rng: &mut impl Rng, days_back: u32) -> f64 {
    let beta = Beta::new(2.0, 5.0).expect("static beta parameters");
    beta.sample(rng) * f64::from(days_back)
}

/// Token accounting for a fake LLM step, drawn from step-specific ranges.
pub fn usage(
    rng: &mut impl Rng,
    prompt_range: (u32, u32),
    completion_range: (u32, u32),
) -> Usage {
    let prompt_tokens = rng.gen_range(prompt_range.0..=prompt_range.1);
    let completion_tokens = rng.gen_range(completion_range.0..=completion_range.1);
    Usage {
        prompt_tokens,
        completion_tokens,
        total_tokens: prompt_tokens + completion_tokens,
    }
}

/// A step or turn duration, uniform over `[lo, hi]` seconds at millisecond
/// resolution.
pub fn duration_secs(rng: &mut impl Rng, lo: f64, hi: f64) -> Duration {
    let secs = rng.gen_range(lo..=hi);
    Duration::milliseconds((secs * 1000.0).round() as i64)
}

/// Five-point helpfulness rating, skewed toward satisfied users.
pub fn helpfulness(rng: &mut impl Rng) -> f64 {
    const VALUES: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];
    let weights = WeightedIndex::new([45u32, 30, 15, 7, 3]).expect("static helpfulness weights");
    VALUES[weights.sample(rng)]
}

/// Binary routing-correctness rating. The real router is right ~88% of the
/// time, so the fake one is too.
pub fn routing_correctness(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.88) { 1.0 } else { 0.0 }
}

/// Six-point frustration rating for a whole thread, skewed low, nudged up
/// when the thread's answers were consistently unhelpful.
pub fn frustration(rng: &mut impl Rng, turn_scores: &[f64]) -> f64 {
    const VALUES: [f64; 6] = [0.0, 0.1, 0.3, 0.6, 0.9, 1.0];
    let weights = WeightedIndex::new([35u32, 25, 20, 10, 7, 3]).expect("static frustration weights");
    let mut base = VALUES[weights.sample(rng)];

    let avg_helpfulness = if turn_scores.is_empty() {
        1.0
    } else {
        turn_scores.iter().sum::<f64>() / turn_scores.len() as f64
    };
    if avg_helpfulness < 0.4 {
        base = (base + 0.3).min(1.0);
    }
    (base * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn turn_count_stays_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let n = turn_count(&mut rng);
            assert!((1..=5).contains(&n));
        }
    }

    #[test]
    fn days_ago_stays_inside_the_window() {
        let mut rng = rng();
        for _ in 0..500 {
            let d = days_ago(&mut rng, 30);
            assert!((0.0..=30.0).contains(&d));
        }
    }

    #[test]
    fn days_ago_clusters_toward_the_present() {
        // Beta(2, 5) has mean 2/7; the sample mean over the 30-day window
        // should land well below the midpoint.
        let mut rng = rng();
        let mean: f64 = (0..2000).map(|_| days_ago(&mut rng, 30)).sum::<f64>() / 2000.0;
        assert!(mean < 12.0, "mean {mean} not skewed recent");
    }

    #[test]
    fn usage_totals_add_up() {
        let mut rng = rng();
        for _ in 0..200 {
            let u = usage(&mut rng, (30, 120), (1, 5));
            assert!((30..=120).contains(&u.prompt_tokens));
            assert!((1..=5).contains(&u.completion_tokens));
            assert_eq!(u.total_tokens, u.prompt_tokens + u.completion_tokens);
        }
    }

    #[test]
    fn duration_secs_stays_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let d = duration_secs(&mut rng, 1.2, 9.0);
            let ms = d.num_milliseconds();
            assert!((1200..=9000).contains(&ms), "duration {ms}ms out of range");
        }
    }

    #[test]
    fn helpfulness_is_always_a_quarter_step() {
        let mut rng = rng();
        for _ in 0..500 {
            let h = helpfulness(&mut rng);
            assert!([0.0, 0.25, 0.5, 0.75, 1.0].contains(&h));
        }
    }

    #[test]
    fn helpfulness_skews_high() {
        let mut rng = rng();
        let mean: f64 = (0..2000).map(|_| helpfulness(&mut rng)).sum::<f64>() / 2000.0;
        assert!(mean > 0.6, "mean {mean} not skewed high");
    }

    #[test]
    fn routing_correctness_is_binary_and_mostly_right() {
        let mut rng = rng();
        let draws: Vec<f64> = (0..2000).map(|_| routing_correctness(&mut rng)).collect();
        assert!(draws.iter().all(|v| *v == 0.0 || *v == 1.0));
        let hit_rate = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((0.82..0.94).contains(&hit_rate), "hit rate {hit_rate}");
    }

    #[test]
    fn frustration_stays_in_unit_range_two_decimals() {
        let mut rng = rng();
        for _ in 0..500 {
            let f = frustration(&mut rng, &[0.75, 1.0]);
            assert!((0.0..=1.0).contains(&f));
            assert_eq!(f, (f * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn low_helpfulness_nudges_frustration_up() {
        // With avg helpfulness below 0.4 the draw gets +0.3, so 0.0 becomes
        // impossible and the mean shifts visibly against the un-nudged case.
        let mut rng = rng();
        let nudged: Vec<f64> = (0..2000).map(|_| frustration(&mut rng, &[0.0, 0.25])).collect();
        assert!(nudged.iter().all(|f| *f >= 0.3));
        assert!(nudged.iter().all(|f| *f <= 1.0));

        let plain_mean: f64 =
            (0..2000).map(|_| frustration(&mut rng, &[1.0])).sum::<f64>() / 2000.0;
        let nudged_mean = nudged.iter().sum::<f64>() / nudged.len() as f64;
        assert!(nudged_mean > plain_mean);
    }

    #[test]
    fn empty_turn_scores_never_nudge() {
        // No turns means nothing to be frustrated about; only base values
        // appear, including 0.0.
        let mut rng = rng();
        let saw_zero = (0..500).any(|_| frustration(&mut rng, &[]) == 0.0);
        assert!(saw_zero);
    }

    #[test]
    fn pick_route_covers_all_routes() {
        let mut rng = rng();
        let mut counts = [0usize; 3];
        for _ in 0..2000 {
            match pick_route(&mut rng) {
                Route::Database => counts[0] += 1,
                Route::Policy => counts[1] += 1,
                Route::Chat => counts[2] += 1,
            }
        }
        assert!(counts.iter().all(|c| *c > 0));
        assert!(counts[0] > counts[1] && counts[1] > counts[2], "{counts:?}");
    }
}
