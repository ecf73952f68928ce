//! Node-related dataset names.
//!
//! Only datasets on this list are extracted. `NODES` is special: it holds
//! the original node coordinates from the `2C` block rather than a result.

pub const NODE_RELATED: [&str; 49] = [
    "NODES", "CP3DF", "CT3D-MIS", "CURR", "DEPTH", "DISP", "DTIMF", "ELPOT", "EMFB", "EMFE",
    "ENER", "ERROR", "FLUX", "FORC", "HCRIT", "M3DF", "MAFLOW", "MDISP", "MESTRAIN", "MSTRAIN",
    "MSTRESS", "NDTEMP", "PDISP", "PE", "PFORC", "PNDTEMP", "PS3DF", "PSTRESS", "PT3DF", "RFL",
    "SDV", "SEN", "STPRES", "STRESS", "STRMID", "STRNEG", "STRPOS", "STTEMP", "THSTRAIN",
    "TOPRES", "TOSTRAIN", "TOTEMP", "TS3DF", "TT3DF", "TURB3DF", "V3DF", "VELO", "VSTRES",
    "ZZSTR",
];

/// Name given to the node coordinate block opened by a `2C` record.
pub const NODES: &str = "NODES";

/// Name given to the element block opened by a `3C` record.
pub const ELEMENTS: &str = "ELEMENTS";

pub fn is_node_related(name: &str) -> bool {
    NODE_RELATED.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_is_listed_first() {
        assert_eq!(NODE_RELATED[0], NODES);
    }

    #[test]
    fn recognizes_result_names() {
        assert!(is_node_related("DISP"));
        assert!(is_node_related("STRESS"));
        assert!(is_node_related("CT3D-MIS"));
        assert!(!is_node_related(ELEMENTS));
        assert!(!is_node_related("FOOBAR"));
        assert!(!is_node_related("disp"));
    }

    #[test]
    fn names_are_unique() {
        for (i, name) in NODE_RELATED.iter().enumerate() {
            assert!(!NODE_RELATED[i + 1..].contains(name), "duplicate {name}");
        }
    }
}
