//! Weather and soil systems for the Verdant simulation.
//!
//! # Weather Generation
//!
//! Weather is a Markov chain: tomorrow's weather depends only on today's.
//! Each row below is the percentage chance of moving from the row's
//! weather to each column's weather:
//!
//! | From \ To | Sunny | Cloudy | Rainy | Stormy | Drought |
//! |-----------|-------|--------|-------|--------|---------|
//! | Sunny     | 60    | 20     | 15    | 3      | 2       |
//! | Cloudy    | 25    | 40     | 25    | 7      | 3       |
//! | Rainy     | 15    | 30     | 40    | 10     | 5       |
//! | Stormy    | 5     | 20     | 30    | 40     | 5       |
//! | Drought   | 50    | 25     | 5     | 0      | 20      |
//!
//! A draw in `[0, 100)` selects the first target whose cumulative weight
//! exceeds the draw. The table is a compile-time constant.
//!
//! # Soil
//!
//! Water and nutrients both drain every day by an amount set by the
//! weather. Rain and storms refill water directly when they arrive.

use verdant_types::{PlantState, Weather};

/// Water added when rain arrives.
pub const RAIN_WATER_GAIN: u32 = 15;

/// Water added when a storm arrives.
pub const STORM_WATER_GAIN: u32 = 25;

/// Health lost when a storm arrives.
pub const STORM_HEALTH_LOSS: u32 = 10;

/// Health lost when a drought arrives.
pub const DROUGHT_HEALTH_LOSS: u32 = 5;

/// The process-wide weather transition table.
pub static WEATHER_TABLE: WeatherTable = WeatherTable::standard();

/// Transition weights between weather states.
///
/// Rows and columns are both in [`Weather`] declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherTable {
    sunny: [u32; 5],
    cloudy: [u32; 5],
    rainy: [u32; 5],
    stormy: [u32; 5],
    drought: [u32; 5],
}

impl WeatherTable {
    /// The standard table every garden uses.
    pub const fn standard() -> Self {
        Self {
            sunny: [60, 20, 15, 3, 2],
            cloudy: [25, 40, 25, 7, 3],
            rainy: [15, 30, 40, 10, 5],
            stormy: [5, 20, 30, 40, 5],
            drought: [50, 25, 5, 0, 20],
        }
    }

    /// Transition weights out of `from`, indexed by target in declaration order.
    pub const fn weights(&self, from: Weather) -> [u32; 5] {
        match from {
            Weather::Sunny => self.sunny,
            Weather::Cloudy => self.cloudy,
            Weather::Rainy => self.rainy,
            Weather::Stormy => self.stormy,
            Weather::Drought => self.drought,
        }
    }

    /// Sum of the transition weights out of `from`.
    pub fn total_weight(&self, from: Weather) -> u32 {
        self.weights(from)
            .iter()
            .fold(0_u32, |total, &weight| total.saturating_add(weight))
    }

    /// Select tomorrow's weather given today's and a draw in `[0, 100)`.
    ///
    /// A draw past the end of the distribution keeps today's weather.
    pub fn sample(&self, current: Weather, draw: u32) -> Weather {
        let mut cumulative: u32 = 0;
        for (target, weight) in Weather::ALL.into_iter().zip(self.weights(current)) {
            cumulative = cumulative.saturating_add(weight);
            if draw < cumulative {
                return target;
            }
        }
        current
    }
}

/// Apply the immediate effects of the plant's current weather.
///
/// Sunny and cloudy days have no direct effect; cloud cover only slows growth.
pub fn apply_weather_effects(state: &mut PlantState) {
    match state.weather {
        Weather::Rainy => state.raise_water(RAIN_WATER_GAIN),
        Weather::Stormy => {
            state.harm(STORM_HEALTH_LOSS);
            state.raise_water(STORM_WATER_GAIN);
        }
        Weather::Drought => state.harm(DROUGHT_HEALTH_LOSS),
        Weather::Sunny | Weather::Cloudy => {}
    }
}

/// Daily water and nutrient loss under the given weather.
pub const fn daily_soil_decay(weather: Weather) -> u32 {
    match weather {
        Weather::Sunny => 15,
        Weather::Drought => 25,
        Weather::Cloudy => 10,
        Weather::Rainy => 5,
        Weather::Stormy => 0,
    }
}

/// Drain water and nutrients for one day.
pub fn apply_soil_decay(state: &mut PlantState) {
    let decay = daily_soil_decay(state.weather);
    state.lower_water(decay);
    state.lower_nutrients(decay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_sums_to_100() {
        for weather in Weather::ALL {
            assert_eq!(
                WEATHER_TABLE.total_weight(weather),
                100,
                "Total weight for {weather:?} should be 100"
            );
        }
    }

    #[test]
    fn sunny_draw_61_selects_cloudy() {
        // Cumulative sums from Sunny: 60, 80, 95, 98, 100.
        assert_eq!(WEATHER_TABLE.sample(Weather::Sunny, 61), Weather::Cloudy);
    }

    #[test]
    fn sunny_boundaries() {
        let table = &WEATHER_TABLE;
        assert_eq!(table.sample(Weather::Sunny, 0), Weather::Sunny);
        assert_eq!(table.sample(Weather::Sunny, 59), Weather::Sunny);
        assert_eq!(table.sample(Weather::Sunny, 60), Weather::Cloudy);
        assert_eq!(table.sample(Weather::Sunny, 80), Weather::Rainy);
        assert_eq!(table.sample(Weather::Sunny, 95), Weather::Stormy);
        assert_eq!(table.sample(Weather::Sunny, 98), Weather::Drought);
        assert_eq!(table.sample(Weather::Sunny, 99), Weather::Drought);
    }

    #[test]
    fn drought_never_turns_stormy() {
        for draw in 0..100 {
            assert_ne!(WEATHER_TABLE.sample(Weather::Drought, draw), Weather::Stormy);
        }
    }

    #[test]
    fn out_of_range_draw_keeps_current() {
        assert_eq!(WEATHER_TABLE.sample(Weather::Rainy, 100), Weather::Rainy);
    }

    #[test]
    fn storm_wounds_and_waters() {
        let mut state = PlantState {
            weather: Weather::Stormy,
            water_level: 90,
            ..PlantState::default()
        };
        apply_weather_effects(&mut state);
        assert_eq!(state.health, 90);
        assert_eq!(state.water_level, 100);
    }

    #[test]
    fn rain_waters_and_drought_wounds() {
        let mut rainy = PlantState {
            weather: Weather::Rainy,
            ..PlantState::default()
        };
        apply_weather_effects(&mut rainy);
        assert_eq!(rainy.water_level, 65);
        assert_eq!(rainy.health, 100);

        let mut dry = PlantState {
            weather: Weather::Drought,
            ..PlantState::default()
        };
        apply_weather_effects(&mut dry);
        assert_eq!(dry.health, 95);
        assert_eq!(dry.water_level, 50);
    }

    #[test]
    fn soil_decay_follows_weather() {
        let mut state = PlantState {
            weather: Weather::Drought,
            water_level: 20,
            ..PlantState::default()
        };
        apply_soil_decay(&mut state);
        assert_eq!(state.water_level, 0);
        assert_eq!(state.nutrient_level, 25);

        state.weather = Weather::Stormy;
        apply_soil_decay(&mut state);
        assert_eq!(state.nutrient_level, 25);
    }
}
