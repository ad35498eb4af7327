use crate::error::SettingsError;

const METRES_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Minutes spent at the boarding stop before every ride.
    pub bus_wait_time: u32,
    /// Metres per minute.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Takes the wait time in minutes and the velocity in km/h.
    pub fn new(bus_wait_time: i64, bus_velocity_kmh: f64) -> Result<Self, SettingsError> {
        let bus_wait_time = u32::try_from(bus_wait_time)
            .map_err(|_| SettingsError::NegativeWaitTime(bus_wait_time))?;
        if !(bus_velocity_kmh.is_finite() && bus_velocity_kmh > 0.0) {
            return Err(SettingsError::InvalidVelocity(bus_velocity_kmh));
        }
        Ok(Self {
            bus_wait_time,
            bus_velocity: bus_velocity_kmh * METRES_PER_KM / MINUTES_PER_HOUR,
        })
    }

    pub fn wait_time(&self) -> f64 {
        self.bus_wait_time as f64
    }

    /// Weight of an edge covering `distance` metres: one wait plus the ride.
    pub fn travel_time(&self, distance: u64) -> f64 {
        distance as f64 / self.bus_velocity + self.wait_time()
    }
}
