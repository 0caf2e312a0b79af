//! Hours-of-Service trip planner.
//!
//! The upstream producer of every duty interval the engine renders: a pure,
//! synchronous simulator that walks a two-segment route (start → pickup →
//! dropoff) under the federal driving limits and emits per-day duty logs
//! plus rest/fuel stop markers.

mod simulator;

pub use simulator::{
    AVERAGE_SPEED_MPH, DUTY_WINDOW_HOURS, FUEL_INTERVAL_MILES, FUEL_STOP_HOURS, HosSimulator,
    MAX_DRIVING_HOURS, REST_BREAK_HOURS, RoutePlan, SERVICE_STOP_HOURS, plan_trip,
};
