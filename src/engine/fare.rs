//! Fare composition. Pure given (request, rates, estimate); every
//! component is rounded to two decimals before it enters the next
//! stage. The rounding order is not associative but is kept
//! penny-identical with the legacy pricing sheet.

use super::{airport, peak};
use crate::entities::{BookingRequest, FareBreakdown, RouteEstimate, ServiceType};
use crate::error::Error;
use crate::rates::{RateTable, VehicleRates};

const WAITING_BLOCK_MINUTES: u32 = 15;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn build_breakdown(
    rates: &RateTable,
    request: &BookingRequest,
    estimate: &RouteEstimate,
) -> Result<FareBreakdown, Error> {
    let vehicle = rates.vehicle(request.vehicle_type)?;
    let hours = billable_hours(vehicle, request);

    let base_price = round2(base_price(vehicle, request.service_type, hours));
    let km_charges = round2(km_charges(
        rates,
        vehicle,
        request.service_type,
        hours,
        estimate.distance_km,
    ));
    let time_charges = round2(time_charges(
        vehicle,
        request.service_type,
        estimate.duration_min,
    ));

    let is_peak_time = peak::is_peak_time(request.date);
    let peak_surcharge = if is_peak_time {
        round2((base_price + km_charges + time_charges) * rates.peak_surcharge_rate)
    } else {
        0.0
    };

    let is_airport_trip =
        airport::is_airport_trip(&request.pickup_address, &request.dropoff_address);
    let additional_fees = round2(additional_fees(rates, request, is_airport_trip));

    let tolls = round2(estimate.toll_estimate);

    let subtotal = base_price + km_charges + time_charges + peak_surcharge + additional_fees + tolls;
    let gst = round2(subtotal * rates.gst_rate);
    let total_price = round2(subtotal + gst);

    Ok(FareBreakdown {
        base_price,
        km_charges,
        time_charges,
        peak_surcharge,
        additional_fees,
        tolls,
        gst,
        total_price,
        distance_km: estimate.distance_km,
        duration_min: estimate.duration_min,
        distance_text: estimate.distance_text.clone(),
        duration_text: estimate.duration_text.clone(),
        method: estimate.method,
        is_peak_time,
        is_airport_trip,
    })
}

/// Hourly bookings bill at least the configured minimum hours.
fn billable_hours(vehicle: &VehicleRates, request: &BookingRequest) -> u32 {
    request
        .hours
        .unwrap_or(0)
        .max(vehicle.hourly_minimum_hours)
}

fn base_price(vehicle: &VehicleRates, service_type: ServiceType, hours: u32) -> f64 {
    match service_type {
        ServiceType::Base => vehicle.base_price,
        ServiceType::Events => vehicle.events_price,
        ServiceType::Hourly => vehicle.hourly_rate * f64::from(hours),
    }
}

fn km_charges(
    rates: &RateTable,
    vehicle: &VehicleRates,
    service_type: ServiceType,
    hours: u32,
    distance_km: f64,
) -> f64 {
    match service_type {
        ServiceType::Hourly => {
            let allowed_km = vehicle.hourly_base_km_per_hour * f64::from(hours);
            (distance_km - allowed_km).max(0.0) * vehicle.hourly_excess_km_rate
        }
        ServiceType::Base | ServiceType::Events => {
            (distance_km - rates.base_kilometers).max(0.0) * vehicle.per_km_rate
        }
    }
}

fn time_charges(vehicle: &VehicleRates, service_type: ServiceType, duration_min: f64) -> f64 {
    match service_type {
        // Hourly bookings already pay for the driver's time.
        ServiceType::Hourly => 0.0,
        ServiceType::Base | ServiceType::Events => duration_min * vehicle.per_minute_rate,
    }
}

fn additional_fees(rates: &RateTable, request: &BookingRequest, is_airport_trip: bool) -> f64 {
    let mut fees = 0.0;

    if is_airport_trip {
        fees += rates.fees.airport;
    }

    let waiting_minutes = request.waiting_time_minutes.unwrap_or(0);
    if waiting_minutes > 0 {
        // Wire-supplied value: div_ceil keeps arbitrary inputs from
        // overflowing the block arithmetic.
        let blocks = waiting_minutes.div_ceil(WAITING_BLOCK_MINUTES);
        fees += f64::from(blocks) * rates.fees.waiting_per_block;
    }

    fees += f64::from(request.additional_stops.unwrap_or(0)) * rates.fees.per_stop;

    if request.service_type == ServiceType::Events && request.car_decoration.unwrap_or(false) {
        fees += rates.fees.event_decoration;
    }

    fees
}
