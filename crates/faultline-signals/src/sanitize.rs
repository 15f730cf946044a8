//! Boundary hardening: replace non-finite numeric inputs with zero.
//!
//! Without this pass a NaN or infinite field propagates into whichever
//! derived value reads it. With it, the bad field reads as absent.

use faultline_core::snapshot::DataSnapshot;
use tracing::warn;

/// Return a copy of `snapshot` with every NaN/±inf number replaced by 0.
pub fn sanitize_snapshot(snapshot: &DataSnapshot) -> DataSnapshot {
    let mut out = snapshot.clone();
    let mut replaced = 0usize;
    let mut fix = |v: &mut f64| {
        if !v.is_finite() {
            *v = 0.0;
            replaced += 1;
        }
    };

    for m in &mut out.markets {
        fix(&mut m.price);
        fix(&mut m.change);
    }
    for s in &mut out.sectors {
        fix(&mut s.change);
    }
    for c in &mut out.commodities {
        fix(&mut c.price);
        fix(&mut c.change);
    }
    for c in &mut out.crypto {
        fix(&mut c.price);
        fix(&mut c.change);
    }
    for i in &mut out.economic_indicators {
        fix(&mut i.value);
        fix(&mut i.change);
    }
    for p in &mut out.predictions {
        fix(&mut p.yes_price);
        fix(&mut p.volume);
    }
    for q in &mut out.earthquakes {
        fix(&mut q.magnitude);
        fix(&mut q.lat);
        fix(&mut q.lon);
        fix(&mut q.depth_km);
    }
    for p in &mut out.protests {
        fix(&mut p.lat);
        fix(&mut p.lon);
    }
    for o in &mut out.outages {
        if let Some(lat) = o.lat.as_mut() {
            fix(lat);
        }
        if let Some(lon) = o.lon.as_mut() {
            fix(lon);
        }
    }
    for v in &mut out.military_vessels {
        fix(&mut v.lat);
        fix(&mut v.lon);
    }
    for f in &mut out.military_flights {
        fix(&mut f.lat);
        fix(&mut f.lon);
    }

    if replaced > 0 {
        warn!(replaced, "non-finite snapshot values replaced with zero");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_core::snapshot::{Earthquake, MarketQuote};

    #[test]
    fn replaces_non_finite_values() {
        let snapshot = DataSnapshot {
            markets: vec![MarketQuote {
                change: f64::NAN,
                price: f64::INFINITY,
                ..Default::default()
            }],
            earthquakes: vec![Earthquake {
                magnitude: f64::NEG_INFINITY,
                lat: 12.5,
                ..Default::default()
            }],
            ..Default::default()
        };
        let clean = sanitize_snapshot(&snapshot);
        assert_eq!(clean.markets[0].change, 0.0);
        assert_eq!(clean.markets[0].price, 0.0);
        assert_eq!(clean.earthquakes[0].magnitude, 0.0);
        assert_eq!(clean.earthquakes[0].lat, 12.5);
    }

    #[test]
    fn finite_snapshot_is_unchanged() {
        let snapshot = DataSnapshot {
            markets: vec![MarketQuote {
                change: -2.5,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(sanitize_snapshot(&snapshot), snapshot);
    }
}
