use crate::geo::haversine_km;
use crate::models::{Coordinates, Listing};

/// Leading number of a distance description: "200m de l'INSAT" -> 200.
///
/// This is only a rough proxy for proximity. Units are ignored, so
/// "5 min" ranks ahead of "200m".
pub fn numeric_prefix(description: &str) -> Option<f64> {
    let trimmed = description.trim_start();
    let mut end = 0;
    for (idx, c) in trimmed.char_indices() {
        let sign = idx == 0 && (c == '-' || c == '+');
        if c.is_ascii_digit() || sign {
            end = idx + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

/// The single unit every listing in a result set is ranked in.
///
/// Kilometres and description prefixes never mix: geographic distance is
/// used only when there is an origin and every listing has coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceScale {
    Kilometres(Coordinates),
    DescriptionPrefix,
}

impl DistanceScale {
    pub fn for_results(results: &[&Listing], origin: Option<Coordinates>) -> Self {
        match origin {
            Some(origin) if results.iter().all(|l| l.coordinates.is_some()) => {
                DistanceScale::Kilometres(origin)
            }
            _ => DistanceScale::DescriptionPrefix,
        }
    }

    /// `None` when the listing has nothing to rank on in this scale
    pub fn key(&self, listing: &Listing) -> Option<f64> {
        match self {
            DistanceScale::Kilometres(origin) => {
                listing.coordinates.map(|c| haversine_km(*origin, c))
            }
            DistanceScale::DescriptionPrefix => listing.distance.as_deref().and_then(numeric_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockCatalog;

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("200m de l'INSAT"), Some(200.0));
        assert_eq!(numeric_prefix("5 min de l'école primaire"), Some(5.0));
        assert_eq!(numeric_prefix("  10 min du centre"), Some(10.0));
        assert_eq!(numeric_prefix("à deux pas"), None);
        assert_eq!(numeric_prefix(""), None);
        assert_eq!(numeric_prefix("-"), None);
    }

    #[test]
    fn test_scale_needs_origin_and_full_coordinates() {
        let mut listings = MockCatalog::catalog();
        let origin = Some(Coordinates::new(36.86, 10.19));

        let all: Vec<&Listing> = listings.iter().collect();
        assert!(matches!(
            DistanceScale::for_results(&all, origin),
            DistanceScale::Kilometres(_)
        ));
        assert_eq!(
            DistanceScale::for_results(&all, None),
            DistanceScale::DescriptionPrefix
        );

        listings[1].coordinates = None;
        let mixed: Vec<&Listing> = listings.iter().collect();
        assert_eq!(
            DistanceScale::for_results(&mixed, origin),
            DistanceScale::DescriptionPrefix
        );
    }
}
