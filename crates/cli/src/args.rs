//! Value parsers for command-line arguments.

use portal_core::{DimensionKind, SpatialPoint};

/// A world to simulate, written `NAME` or `NAME:KIND`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSpec {
    pub name: String,
    pub kind: DimensionKind,
}

pub fn parse_kind(raw: &str) -> Result<DimensionKind, String> {
    raw.trim().parse().map_err(|_| {
        format!("unknown dimension kind '{raw}' (expected OVERWORLD, NETHER or THE_END)")
    })
}

/// `x,z` in block coordinates.
pub fn parse_point(raw: &str) -> Result<SpatialPoint, String> {
    let (x, z) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,z', got '{raw}'"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad x in '{raw}': {e}"))?;
    let z = z
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad z in '{raw}': {e}"))?;
    Ok(SpatialPoint::new(x, z))
}

pub fn parse_world(raw: &str) -> Result<WorldSpec, String> {
    let (name, kind) = match raw.rsplit_once(':') {
        Some((name, kind)) => (name, parse_kind(kind)?),
        None => (raw, DimensionKind::Overworld),
    };
    if name.is_empty() {
        return Err(format!("missing world name in '{raw}'"));
    }
    Ok(WorldSpec {
        name: name.to_owned(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_accept_spaces_and_fractions() {
        assert_eq!(parse_point("10,-4").unwrap(), SpatialPoint::new(10.0, -4.0));
        assert_eq!(parse_point(" 0.5 , 2 ").unwrap(), SpatialPoint::new(0.5, 2.0));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn worlds_default_to_overworld() {
        assert_eq!(
            parse_world("lobby").unwrap(),
            WorldSpec {
                name: "lobby".into(),
                kind: DimensionKind::Overworld
            }
        );
        assert_eq!(parse_world("caves:nether").unwrap().kind, DimensionKind::Nether);
        assert_eq!(parse_world("end:THE_END").unwrap().kind, DimensionKind::TheEnd);
        assert!(parse_world("x:void").is_err());
        assert!(parse_world(":NETHER").is_err());
    }
}
