//! Street descriptions and link matching

use crate::NodeId;
use crate::matching::normalize::{names_match, normalize_street_type};
use crate::model::{StreetLink, StreetNetwork};

/// A street as written by a human: specific name and type, either of which
/// may be unknown. Query-side input only; never stored in the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetDescription {
    pub name: Option<String>,
    pub street_type: Option<String>,
}

impl StreetDescription {
    pub fn new(name: impl Into<String>, street_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            street_type: Some(street_type.into()),
        }
    }

    /// Description with the type unknown ("Market" rather than "Market St")
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            street_type: None,
        }
    }
}

/// Check whether street 1 and street 2 match by name (e.g. Market) and
/// type (e.g. St).
///
/// A missing name on either side never matches; a missing type on either
/// side falls back to name-only matching.
pub fn street_descriptions_match(
    name1: Option<&str>,
    type1: Option<&str>,
    name2: Option<&str>,
    type2: Option<&str>,
    fuzzy: bool,
) -> bool {
    let (Some(name1), Some(name2)) = (name1, name2) else {
        return false;
    };
    match (type1, type2) {
        (Some(type1), Some(type2)) => {
            names_match(name1, name2, fuzzy)
                && normalize_street_type(type1) == normalize_street_type(type2)
        }
        _ => names_match(name1, name2, fuzzy),
    }
}

/// Whether a link's stored name/type match `street`
pub fn link_matches(link: &StreetLink, street: &StreetDescription, fuzzy: bool) -> bool {
    street_descriptions_match(
        link.street_name.as_deref(),
        link.street_type.as_deref(),
        street.name.as_deref(),
        street.street_type.as_deref(),
        fuzzy,
    )
}

/// Whether the link stored for the ordered node pair matches `street`.
///
/// An absent link never matches.
pub fn edge_matches(
    network: &StreetNetwork,
    from: NodeId,
    to: NodeId,
    street: &StreetDescription,
    fuzzy: bool,
) -> bool {
    network
        .link_between(from, to)
        .is_some_and(|link| link_matches(link, street, fuzzy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreetNode;

    #[test]
    fn missing_name_never_matches() {
        assert!(!street_descriptions_match(
            None,
            Some("ST"),
            Some("MARKET"),
            Some("ST"),
            false
        ));
        assert!(!street_descriptions_match(None, None, None, None, true));
    }

    #[test]
    fn missing_type_falls_back_to_name_only() {
        assert!(street_descriptions_match(
            Some("MARKET"),
            None,
            Some("MARKET"),
            Some("ST"),
            false
        ));
        assert!(street_descriptions_match(
            Some("Market"),
            Some("St"),
            Some("MARKET"),
            None,
            false
        ));
    }

    #[test]
    fn both_types_present_must_match_after_normalization() {
        assert!(street_descriptions_match(
            Some("Geary"),
            Some("Av"),
            Some("GEARY"),
            Some("AVE"),
            false
        ));
        assert!(!street_descriptions_match(
            Some("Geary"),
            Some("Blvd"),
            Some("GEARY"),
            Some("AVE"),
            false
        ));
    }

    #[test]
    fn link_matching_reads_stored_attributes() {
        let link = StreetLink::new(Some("North Market".into()), Some("St".into()), 1.0);
        assert!(link_matches(
            &link,
            &StreetDescription::name_only("Market"),
            true
        ));
        assert!(!link_matches(
            &link,
            &StreetDescription::name_only("Market"),
            false
        ));
        let unnamed = StreetLink::new(None, None, 1.0);
        assert!(!link_matches(
            &unnamed,
            &StreetDescription::name_only("Market"),
            true
        ));
    }

    #[test]
    fn edge_matching_requires_the_link_to_exist() {
        let nodes = vec![StreetNode::new(1, 0.0, 0.0), StreetNode::new(2, 1.0, 0.0)];
        let links = vec![(
            1,
            2,
            StreetLink::new(Some("MARKET".into()), Some("ST".into()), 1.0),
        )];
        let network = StreetNetwork::from_tables(nodes, links).unwrap();
        let market = StreetDescription::new("Market", "St");
        assert!(edge_matches(&network, 1, 2, &market, false));
        // only one direction was encoded
        assert!(!edge_matches(&network, 2, 1, &market, false));
    }
}
