//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_numeric_id;

/// Investor account identifier as issued by the portal API.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

/// Investment package (tranche) identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PackageId(u64);

impl_numeric_id!(UserId, PackageId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_id_parses_from_route_segment() {
        let id: PackageId = "42".parse().unwrap();
        assert_eq!(id, PackageId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn package_id_rejects_non_numeric_segment() {
        assert!("forty-two".parse::<PackageId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
