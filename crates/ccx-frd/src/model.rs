//! In-memory result model.
//!
//! A [`ResultModel`] maps dataset names to [`NodeTable`]s, which map node ids
//! to value tuples. Both keep insertion order: datasets in the order they are
//! first seen in the FRD file, nodes in file order. Re-inserting an existing
//! key replaces its value but keeps its original position.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Values of one dataset, indexed by node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeTable {
    ids: Vec<i64>,
    values: Vec<Vec<f64>>,
    index: HashMap<i64, usize>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `values` under `node`, returning the tuple it replaced.
    pub fn insert(&mut self, node: i64, values: Vec<f64>) -> Option<Vec<f64>> {
        match self.index.get(&node) {
            Some(&slot) => Some(std::mem::replace(&mut self.values[slot], values)),
            None => {
                self.index.insert(node, self.ids.len());
                self.ids.push(node);
                self.values.push(values);
                None
            }
        }
    }

    pub fn get(&self, node: i64) -> Option<&[f64]> {
        self.index.get(&node).map(|&slot| self.values[slot].as_slice())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node ids in file order.
    pub fn node_ids(&self) -> &[i64] {
        &self.ids
    }

    /// Length of the value tuples, taken from the first node.
    pub fn tuple_len(&self) -> Option<usize> {
        self.values.first().map(Vec::len)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (i64, &[f64])> + '_ {
        self.ids
            .iter()
            .zip(&self.values)
            .map(|(&id, values)| (id, values.as_slice()))
    }
}

impl FromIterator<(i64, Vec<f64>)> for NodeTable {
    fn from_iter<I: IntoIterator<Item = (i64, Vec<f64>)>>(iter: I) -> Self {
        let mut table = NodeTable::new();
        for (node, values) in iter {
            table.insert(node, values);
        }
        table
    }
}

/// Node-related datasets extracted from one FRD file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultModel {
    datasets: Vec<(String, NodeTable)>,
}

impl ResultModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: NodeTable) -> Option<NodeTable> {
        let name = name.into();
        match self.datasets.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, table)),
            None => {
                self.datasets.push((name, table));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&NodeTable> {
        self.datasets
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, table)| table)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.datasets.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &NodeTable)> + '_ {
        self.datasets
            .iter()
            .map(|(name, table)| (name.as_str(), table))
    }
}

impl Serialize for NodeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for NodeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeTableVisitor;

        impl<'de> Visitor<'de> for NodeTableVisitor {
            type Value = NodeTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of node ids to value arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NodeTable, A::Error> {
                let mut table = NodeTable::new();
                while let Some((node, values)) = map.next_entry::<i64, Vec<f64>>()? {
                    table.insert(node, values);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(NodeTableVisitor)
    }
}

impl Serialize for ResultModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ResultModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultModelVisitor;

        impl<'de> Visitor<'de> for ResultModelVisitor {
            type Value = ResultModel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of dataset names to node tables")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ResultModel, A::Error> {
                let mut model = ResultModel::new();
                while let Some((name, table)) = map.next_entry::<String, NodeTable>()? {
                    model.insert(name, table);
                }
                Ok(model)
            }
        }

        deserializer.deserialize_map(ResultModelVisitor)
    }
}
