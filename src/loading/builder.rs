use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use geo::Point;
use hashbrown::HashMap;
use log::info;

use super::config::NetworkConfig;
use super::raw_types::{LINK_COLUMNS, NODE_COLUMNS, RawLink, RawNode};
use crate::model::{StreetLink, StreetNetwork, StreetNode};
use crate::{Error, NodeId};

/// Builds a street network from the configured link and node tables
///
/// # Errors
///
/// Returns an error if either table cannot be read or a link references a
/// node missing from the node table.
pub fn load_street_network(config: &NetworkConfig) -> Result<StreetNetwork, Error> {
    validate_config(config)?;

    info!("Reading network links: {}", config.links_path.display());
    let links = read_links(&config.links_path)?;
    info!("Reading network nodes: {}", config.nodes_path.display());
    let nodes = read_nodes(&config.nodes_path)?;

    let network = StreetNetwork::from_tables(nodes, links)?;
    info!(
        "Street network loaded: {} nodes, {} links",
        network.node_count(),
        network.link_count()
    );
    Ok(network)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if !config.links_path.exists() {
        return Err(Error::InvalidData(format!(
            "link table not found: {}",
            config.links_path.display()
        )));
    }
    if !config.nodes_path.exists() {
        return Err(Error::InvalidData(format!(
            "node table not found: {}",
            config.nodes_path.display()
        )));
    }
    Ok(())
}

fn read_links(path: &Path) -> Result<Vec<(NodeId, NodeId, StreetLink)>, Error> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();
    let mut links = Vec::new();
    for record in reader.records() {
        let record = record?;
        let raw: RawLink = record.deserialize(Some(&headers))?;
        let mut link = StreetLink::new(raw.street_name, raw.street_type, raw.distance);
        link.attrs = passthrough_attrs(&headers, &record, LINK_COLUMNS);
        links.push((raw.from_node, raw.to_node, link));
    }
    Ok(links)
}

fn read_nodes(path: &Path) -> Result<Vec<StreetNode>, Error> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();
    let mut nodes = Vec::new();
    for record in reader.records() {
        let record = record?;
        let raw: RawNode = record.deserialize(Some(&headers))?;
        nodes.push(StreetNode {
            id: raw.id,
            geometry: Point::new(raw.x, raw.y),
            attrs: passthrough_attrs(&headers, &record, NODE_COLUMNS),
        });
    }
    Ok(nodes)
}

/// Columns outside the known set are retained verbatim
fn passthrough_attrs(
    headers: &StringRecord,
    record: &StringRecord,
    known: &[&str],
) -> HashMap<String, String> {
    headers
        .iter()
        .zip(record.iter())
        .filter(|(header, _)| !known.contains(header))
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect()
}
