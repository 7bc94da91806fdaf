use crate::bits::BitString;
use crate::fields::Field;
use crate::{OtpError, RawValue, Region, Result, MAX_REGION_INDEX};
use std::collections::BTreeMap;

/// The registers of one dump, keyed by region index.
///
/// Each region is written at most once; a dump never legitimately reports a region twice.
#[derive(Debug, Clone, Default)]
pub struct RegisterStore {
    values: BTreeMap<u8, RawValue>,
}

impl RegisterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the register at `index`, which need not be a named region.
    pub fn insert(&mut self, index: u8, value: RawValue) -> Result<()> {
        if index > MAX_REGION_INDEX {
            return Err(OtpError::RegionOutOfRange {
                index: index as u32,
            });
        }
        if self.values.contains_key(&index) {
            return Err(OtpError::DuplicateRegion { region: index });
        }
        tracing::trace!("loaded region {index:02}: {value}");
        self.values.insert(index, value);
        Ok(())
    }

    /// Validate `text` and load it as the value of `region`.
    pub fn set(&mut self, region: Region, text: &str) -> Result<()> {
        let value = RawValue::parse(text).map_err(|_| OtpError::Format {
            region: region.index(),
            value: text.to_string(),
        })?;
        self.insert(region.index(), value)
    }

    pub fn get(&self, region: Region) -> Result<RawValue> {
        self.get_index(region.index())
            .ok_or(OtpError::MissingRegion { region })
    }

    pub fn get_index(&self, index: u8) -> Option<RawValue> {
        self.values.get(&index).copied()
    }

    pub fn contains(&self, region: Region) -> bool {
        self.values.contains_key(&region.index())
    }

    /// Loaded registers in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, RawValue)> + '_ {
        self.values.iter().map(|(&index, &value)| (index, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract a named field from its register.
    pub fn field<F: Field>(&self, field: F) -> Result<BitString> {
        Ok(self.get(F::REGION)?.extract(field.range()))
    }

    /// Like [`RegisterStore::field`], looking the field up by name.
    pub fn field_named<F: Field>(&self, name: &str) -> Result<BitString> {
        self.field(name.parse::<F>()?)
    }
}
