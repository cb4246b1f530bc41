//! Numeric constants of every behavior state.
//!
//! Defaults reproduce the stock colony.  All thresholds are compared strictly
//! (`<` / `>`); durations and rates are in simulated seconds.

/// Thresholds, rates, timers, and randomized ranges used by the states.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorTuning {
    // Idle
    pub idle_decision_min: f32,
    pub idle_decision_max: f32,
    /// Idle → FindFood below this hunger.
    pub hungry_below:      f32,
    /// Idle → GoHome below this energy (with a home).
    pub tired_below:       f32,

    // FindWork
    pub find_work_timeout: f32,

    // Working
    pub work_energy_drain:   f32,
    pub work_hunger_drain:   f32,
    pub production_interval: f32,
    pub work_duration_min:   f32,
    pub work_duration_max:   f32,
    /// Working → FindFood below this hunger.
    pub work_hungry_below:   f32,
    /// Working → Rest below this energy.
    pub work_tired_below:    f32,

    // FindFood / Eating
    pub food_search_timeout: f32,
    pub eat_rate:            f32,
    pub eat_duration:        f32,
    pub sated_above:         f32,

    // Rest
    pub rest_rate:           f32,
    pub rest_duration:       f32,
    pub rested_above:        f32,

    // Wander
    pub wander_distance_min: f32,
    pub wander_distance_max: f32,
    pub wander_speed_factor: f32,
    pub wander_duration:     f32,

    // Sleeping
    pub sleep_energy_rate:    f32,
    pub sleep_happiness_rate: f32,
    pub sleep_duration:       f32,
    pub slept_above:          f32,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            idle_decision_min: 2.0,
            idle_decision_max: 5.0,
            hungry_below:      30.0,
            tired_below:       30.0,

            find_work_timeout: 10.0,

            work_energy_drain:   2.0,
            work_hunger_drain:   1.0,
            production_interval: 5.0,
            work_duration_min:   30.0,
            work_duration_max:   60.0,
            work_hungry_below:   20.0,
            work_tired_below:    20.0,

            food_search_timeout: 5.0,
            eat_rate:            20.0,
            eat_duration:        5.0,
            sated_above:         80.0,

            rest_rate:           10.0,
            rest_duration:       10.0,
            rested_above:        80.0,

            wander_distance_min: 5.0,
            wander_distance_max: 15.0,
            wander_speed_factor: 0.5,
            wander_duration:     10.0,

            sleep_energy_rate:    15.0,
            sleep_happiness_rate: 5.0,
            sleep_duration:       20.0,
            slept_above:          90.0,
        }
    }
}
