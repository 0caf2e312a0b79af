//! Route-to-duty-log simulation under the federal driving limits

use tracing::debug;

use crate::types::round2;
use crate::{DayLog, DutyStatus, RawInterval, StopEvent, StopKind, TripRecord};

/// Daily driving allowed between rest breaks.
pub const MAX_DRIVING_HOURS: f64 = 11.0;
/// On-duty window opened by coming on duty after a rest.
pub const DUTY_WINDOW_HOURS: f64 = 14.0;
/// Sleeper-berth rest that resets the driving and window clocks.
pub const REST_BREAK_HOURS: f64 = 10.0;
/// Distance between fuel stops.
pub const FUEL_INTERVAL_MILES: f64 = 1000.0;
/// Assumed highway average used to convert miles to driving hours.
pub const AVERAGE_SPEED_MPH: f64 = 60.0;
/// On-duty time for a fuel stop.
pub const FUEL_STOP_HOURS: f64 = 0.5;
/// On-duty time for pickup and for dropoff.
pub const SERVICE_STOP_HOURS: f64 = 1.0;

/// Day-1 duty start; hours 0-8 are logged off duty.
const DAY_START_HOUR: f64 = 8.0;
/// Float epsilon for remaining-work loops.
const EPSILON: f64 = 0.001;

/// The two route legs the simulator drives: start → pickup, pickup → dropoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePlan {
    pub segment1_miles: f64,
    pub segment2_miles: f64,
}

impl RoutePlan {
    pub fn new(segment1_miles: f64, segment2_miles: f64) -> Self {
        Self { segment1_miles, segment2_miles }
    }

    /// Split a total distance 50/50 when per-segment distances are absent.
    pub fn from_total(total_miles: f64) -> Self {
        Self::new(total_miles * 0.5, total_miles * 0.5)
    }

    pub fn total_miles(&self) -> f64 {
        self.segment1_miles + self.segment2_miles
    }
}

/// Walks a route hour by hour, splitting duty entries at midnight and
/// inserting rests and fuel stops as the limits demand.
///
/// Time is tracked as absolute hours from day-1 midnight; entry bounds are
/// recorded at two-decimal precision, matching the log grid's resolution.
#[derive(Debug)]
pub struct HosSimulator {
    days: Vec<DayLog>,
    stops: Vec<StopEvent>,
    /// Absolute hours since day-1 midnight.
    current_time: f64,
    /// Driving hours accrued since the last rest break.
    driving_since_rest: f64,
    /// Absolute hour the current 14-hour window opened.
    duty_window_start: f64,
    trip_miles: f64,
    miles_since_fuel: f64,
}

impl HosSimulator {
    pub fn new() -> Self {
        let mut sim = Self {
            days: Vec::new(),
            stops: Vec::new(),
            current_time: DAY_START_HOUR,
            driving_since_rest: 0.0,
            duty_window_start: DAY_START_HOUR,
            trip_miles: 0.0,
            miles_since_fuel: 0.0,
        };
        sim.day_entries(1).push(RawInterval::new(DutyStatus::Off.as_str(), 0.0, DAY_START_HOUR));
        sim
    }

    /// Simulate the full trip and return the per-day logs and stop markers.
    pub fn simulate(mut self, plan: &RoutePlan) -> (Vec<DayLog>, Vec<StopEvent>) {
        debug!(
            segment1 = plan.segment1_miles,
            segment2 = plan.segment2_miles,
            "simulating trip"
        );
        self.drive(plan.segment1_miles);
        self.service_stop(); // pickup
        self.drive(plan.segment2_miles);
        self.service_stop(); // dropoff

        // Close the trip off duty through the end of the final day.
        let tail = 24.0 - self.current_time % 24.0;
        self.push_entry(DutyStatus::Off, tail);

        (self.days, self.stops)
    }

    fn drive(&mut self, mut miles_to_go: f64) {
        while miles_to_go > EPSILON {
            let miles_to_fuel = FUEL_INTERVAL_MILES - self.miles_since_fuel;
            let drive_hours_left = MAX_DRIVING_HOURS - self.driving_since_rest;
            let window_hours_left =
                self.duty_window_start + DUTY_WINDOW_HOURS - self.current_time;

            if drive_hours_left <= EPSILON || window_hours_left <= EPSILON {
                self.take_rest();
                continue;
            }

            let max_drive_miles = drive_hours_left.min(window_hours_left) * AVERAGE_SPEED_MPH;
            let chunk = miles_to_go.min(miles_to_fuel).min(max_drive_miles);

            self.push_entry(DutyStatus::Driving, chunk / AVERAGE_SPEED_MPH);
            self.trip_miles += chunk;
            self.miles_since_fuel += chunk;
            miles_to_go -= chunk;

            if self.miles_since_fuel >= FUEL_INTERVAL_MILES - EPSILON {
                debug!(trip_miles = self.trip_miles, "fuel stop");
                self.stops.push(StopEvent { kind: StopKind::Fuel, trip_miles: self.trip_miles });
                self.push_entry(DutyStatus::On, FUEL_STOP_HOURS);
                self.miles_since_fuel = 0.0;
            }
        }
    }

    /// Pickup or dropoff: one on-duty hour, preceded by a rest when the hour
    /// would not fit the remaining 14-hour window.
    fn service_stop(&mut self) {
        if self.current_time - self.duty_window_start + SERVICE_STOP_HOURS > DUTY_WINDOW_HOURS {
            self.take_rest();
        }
        self.push_entry(DutyStatus::On, SERVICE_STOP_HOURS);
    }

    fn take_rest(&mut self) {
        debug!(trip_miles = self.trip_miles, "rest stop");
        self.stops.push(StopEvent { kind: StopKind::Rest, trip_miles: self.trip_miles });
        self.push_entry(DutyStatus::Sleeper, REST_BREAK_HOURS);
        self.driving_since_rest = 0.0;
        // The new window opens when we come back on duty, which is
        // immediately after the rest ends.
        self.duty_window_start = self.current_time;
    }

    /// Append a duty entry, splitting at midnight into per-day chunks.
    fn push_entry(&mut self, status: DutyStatus, duration: f64) {
        let mut remaining = duration;
        while remaining > EPSILON {
            let day_number = (self.current_time / 24.0) as u32 + 1;
            let local = self.current_time % 24.0;
            let chunk = remaining.min(24.0 - local);

            self.day_entries(day_number).push(RawInterval::new(
                status.as_str(),
                round2(local),
                round2(local + chunk),
            ));

            self.current_time += chunk;
            if status == DutyStatus::Driving {
                self.driving_since_rest += chunk;
            }
            remaining -= chunk;
        }
    }

    fn day_entries(&mut self, day_number: u32) -> &mut Vec<RawInterval> {
        let idx = match self.days.iter().position(|d| d.day_number == day_number) {
            Some(idx) => idx,
            None => {
                self.days.push(DayLog::new(day_number, format!("Day {day_number}"), Vec::new()));
                self.days.len() - 1
            }
        };
        &mut self.days[idx].intervals
    }
}

impl Default for HosSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulate a route and package the result as a complete trip record.
pub fn plan_trip(plan: &RoutePlan, cycle_hours_used: f64) -> TripRecord {
    let (days, stops) = HosSimulator::new().simulate(plan);
    TripRecord { days, cycle_hours_used, start_location: String::new(), stops }
}
