use super::crs::{AreaOfUse, Crs, Datum, Projection};
use super::tmerc::{TmercParams, TransverseMercator};

/// Look up a registered EPSG code.
///
/// Covers WGS 84 (4326), Pulkovo 1942 geographic (4284), Pulkovo 1942 3-degree
/// Gauss-Kruger zone 26 (2542), Pulkovo 1942 6-degree Gauss-Kruger zones 4-32
/// (28404-28432) and WGS 84 UTM zones (32601-32660, 32701-32760).
pub fn lookup(code: u32) -> Option<Crs> {
    match code {
        4326 => Some(Crs::wgs84()),
        4284 => Some(Crs::new(
            "Pulkovo 1942",
            Datum::PULKOVO_1942,
            Projection::Geographic,
        )),
        2542 => Some(
            gauss_kruger(
                "Pulkovo 1942 / 3-degree Gauss-Kruger zone 26",
                TmercParams::gauss_kruger(78.0, 26),
            )
            .with_area_of_use(AreaOfUse {
                west: 76.5,
                south: 40.1,
                east: 79.5,
                north: 74.0,
            }),
        ),
        28404..=28432 => {
            let zone = code - 28400;
            let central_meridian = f64::from(zone) * 6.0 - 3.0;
            Some(
                gauss_kruger(
                    format!("Pulkovo 1942 / Gauss-Kruger zone {}", zone),
                    TmercParams::gauss_kruger(central_meridian, zone),
                )
                .with_area_of_use(AreaOfUse {
                    west: central_meridian - 3.0,
                    south: 35.0,
                    east: central_meridian + 3.0,
                    north: 84.0,
                }),
            )
        }
        32601..=32660 | 32701..=32760 => {
            let south = code > 32700;
            let zone = (code % 100) as u8;
            let tmerc = TransverseMercator::new(
                &Datum::WGS84.ellipsoid,
                TmercParams::utm(zone, south),
            );
            Some(Crs::new(
                format!("WGS 84 / UTM zone {}{}", zone, if south { 'S' } else { 'N' }),
                Datum::WGS84,
                Projection::TransverseMercator(tmerc),
            ))
        }
        _ => None,
    }
}

fn gauss_kruger(name: impl Into<String>, params: TmercParams) -> Crs {
    let tmerc = TransverseMercator::new(&Datum::PULKOVO_1942.ellipsoid, params);
    Crs::new(
        name,
        Datum::PULKOVO_1942,
        Projection::TransverseMercator(tmerc),
    )
}
