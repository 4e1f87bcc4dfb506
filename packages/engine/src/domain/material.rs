//! Materials - closed set of particle kinds and their physical parameters
//!
//! Materials are a tagged enum; per-kind behaviour is dispatched with `match`
//! in the grid step. Physical parameters live in a `MaterialTable` so a
//! configuration file can tune them without touching the kinds themselves.

use serde::{Deserialize, Serialize};

use super::color::Rgba;

/// Base colour of sand (#dcb159)
pub const SAND_COLOR: Rgba = Rgba::opaque(220, 177, 89);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Material {
    Empty = 0,
    Sand = 1,
}

impl Material {
    pub const COUNT: usize = 2;
    pub const ALL: [Material; Material::COUNT] = [Material::Empty, Material::Sand];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Sand => "sand",
        }
    }

    /// Empty cells never move and are always a valid fall target
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Built-in parameters, used unless a config overrides them
    pub const fn default_props(self) -> MaterialProps {
        match self {
            Material::Empty => MaterialProps {
                base_color: Rgba::BLACK,
                max_speed: 0.0,
                acceleration: 0.0,
                varies_color: false,
            },
            Material::Sand => MaterialProps {
                base_color: SAND_COLOR,
                max_speed: 8.0,
                acceleration: 0.4,
                varies_color: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProps {
    pub base_color: Rgba,
    /// Cells per tick; 0 means the material never moves
    pub max_speed: f32,
    /// Velocity gained per tick
    pub acceleration: f32,
    pub varies_color: bool,
}

impl MaterialProps {
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.max_speed > 0.0
    }
}

/// One `MaterialProps` per material, indexed by material id
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTable {
    props: [MaterialProps; Material::COUNT],
}

impl MaterialTable {
    #[inline]
    pub fn get(&self, material: Material) -> &MaterialProps {
        &self.props[material as usize]
    }

    pub fn get_mut(&mut self, material: Material) -> &mut MaterialProps {
        &mut self.props[material as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Material, &MaterialProps)> + '_ {
        Material::ALL.iter().copied().zip(self.props.iter())
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self {
            props: [Material::Empty.default_props(), Material::Sand.default_props()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for material in Material::ALL {
            assert_eq!(Material::from_id(material.id()), Some(material));
        }
        assert_eq!(Material::from_id(Material::COUNT as u8), None);
    }

    #[test]
    fn only_sand_is_mobile_by_default() {
        let table = MaterialTable::default();
        assert!(!table.get(Material::Empty).is_mobile());
        assert!(table.get(Material::Sand).is_mobile());
        assert_eq!(table.get(Material::Sand).max_speed, 8.0);
        assert_eq!(table.get(Material::Sand).acceleration, 0.4);
    }

    #[test]
    fn table_iter_pairs_materials_with_their_props() {
        let table = MaterialTable::default();
        let names: Vec<_> = table.iter().map(|(m, p)| (m.name(), p.base_color)).collect();
        assert_eq!(names, vec![("empty", Rgba::BLACK), ("sand", SAND_COLOR)]);
    }
}
