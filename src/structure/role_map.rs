//! Role map resolution (PDF spec Section 14.7.3).
//!
//! Producers may use their own structure type names and map them onto the
//! standard ones through `/RoleMap`. The mapping is applied once, when the
//! document is opened, so that the converter only ever sees standard types.

use super::types::{StructChild, StructElem, StructTreeRoot, StructType};
use std::collections::HashMap;

/// Resolve a custom type through the role map.
///
/// Mappings may chain (`Heading1 -> Title -> H1`). A chain that loops or
/// never reaches a standard type leaves the last custom name in place.
pub fn resolve_role(struct_type: &StructType, role_map: &HashMap<String, String>) -> StructType {
    let mut current = struct_type.clone();
    for _ in 0..=role_map.len() {
        let StructType::Custom(name) = &current else {
            break;
        };
        match role_map.get(name) {
            Some(mapped) if mapped != name => current = StructType::from_name(mapped),
            _ => break,
        }
    }
    current
}

/// Rewrite every custom structure type in the tree through its role map.
pub fn apply_role_map(root: &mut StructTreeRoot) {
    if root.role_map.is_empty() {
        return;
    }
    let role_map = &root.role_map;
    let mut remapped = 0usize;
    for elem in &mut root.root_elements {
        remap_element(elem, role_map, &mut remapped);
    }
    log::debug!("Role map rewrote {} structure elements", remapped);
}

fn remap_element(elem: &mut StructElem, role_map: &HashMap<String, String>, remapped: &mut usize) {
    if !elem.struct_type.is_standard() {
        let resolved = resolve_role(&elem.struct_type, role_map);
        if resolved != elem.struct_type {
            log::trace!("Role map: {} -> {}", elem.struct_type, resolved);
            elem.struct_type = resolved;
            *remapped += 1;
        }
    }
    for child in &mut elem.children {
        if let StructChild::Element(child_elem) = child {
            remap_element(child_elem, role_map, remapped);
        }
    }
}
