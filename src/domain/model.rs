use crate::core::geo;
use crate::utils::error::SortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_REFERENCE_LATITUDE: f64 = 53.339428;
pub const DEFAULT_REFERENCE_LONGITUDE: f64 = -6.257664;
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Fixed point every customer distance is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub earth_radius_meters: f64,
}

impl ReferencePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            earth_radius_meters: EARTH_RADIUS_METERS,
        }
    }

    /// Great-circle distance in meters from this point to the given coordinates.
    pub fn distance_to(&self, latitude: f64, longitude: f64) -> f64 {
        geo::distance(
            latitude,
            longitude,
            self.latitude,
            self.longitude,
            self.earth_radius_meters,
        )
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_LATITUDE, DEFAULT_REFERENCE_LONGITUDE)
    }
}

/// A customer from the remote dataset, with its distance to the reference point.
///
/// Coordinates are not range checked; out-of-range values still yield a
/// (meaningless) finite distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    distance: f64,
}

impl CustomerRecord {
    /// Builds a record, computing `distance` from `reference` unless one is supplied.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        distance: Option<f64>,
        reference: &ReferencePoint,
    ) -> Self {
        let distance = distance.unwrap_or_else(|| reference.distance_to(latitude, longitude));
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            distance,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Meters from the reference point.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Sortable record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Id,
    Name,
    Latitude,
    Longitude,
    Distance,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Id,
        FieldName::Name,
        FieldName::Latitude,
        FieldName::Longitude,
        FieldName::Distance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Id => "id",
            FieldName::Name => "name",
            FieldName::Latitude => "latitude",
            FieldName::Longitude => "longitude",
            FieldName::Distance => "distance",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FieldName::Name)
    }
}

impl FromStr for FieldName {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SortError::UnknownField {
                field: s.to_string(),
            })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Ascending),
            "desc" => Ok(Direction::Descending),
            _ => Err(SortError::UnknownDirection {
                direction: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("asc"),
            Direction::Descending => f.write_str("desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriteria {
    pub field: FieldName,
    pub direction: Direction,
}

impl SortCriteria {
    pub fn new(field: FieldName, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Resolves raw query values into criteria.
    ///
    /// Both absent means "keep source order" (`Ok(None)`). A field on its own
    /// sorts ascending; a direction without a field is an unknown field.
    pub fn resolve(
        field: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Option<Self>, SortError> {
        if field.is_none() && direction.is_none() {
            return Ok(None);
        }

        let field = field.unwrap_or_default().parse::<FieldName>()?;
        let direction = direction
            .map(str::parse::<Direction>)
            .transpose()?
            .unwrap_or_default();

        Ok(Some(Self::new(field, direction)))
    }
}
