use crate::*;
use std::collections::HashMap;

pub(crate) fn validate_name(name: &str, what: &str) -> Result<(), CatalogError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(CatalogError::InvalidInput(format!(
            "{} name must be 1-{} characters",
            what, MAX_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_tier(tier: &str) -> Result<(), CatalogError> {
    if !TIERS.contains(&tier) {
        return Err(CatalogError::InvalidTier(format!(
            "'{}' is not one of {}",
            tier,
            TIERS.join(", ")
        )));
    }
    Ok(())
}

// Storage key invariant: parallels participate in the edition composite key.
pub(crate) fn validate_parallel(parallel: &str) -> Result<(), CatalogError> {
    if parallel.is_empty() || parallel.len() > MAX_NAME_LEN {
        return Err(CatalogError::InvalidInput(format!(
            "Parallel must be 1-{} characters",
            MAX_NAME_LEN
        )));
    }
    if parallel.contains(DELIMITER) || parallel.contains('\0') {
        return Err(CatalogError::InvalidInput(
            "Parallel cannot contain ':' or null characters".into(),
        ));
    }
    Ok(())
}

// Storage key invariant: slugs key both association indexes.
pub(crate) fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return Err(CatalogError::InvalidInput(format!(
            "Slug must be 1-{} characters",
            MAX_SLUG_LEN
        )));
    }
    if slug.contains(DELIMITER) || slug.contains('\0') {
        return Err(CatalogError::InvalidInput(
            "Slug cannot contain ':' or null characters".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_metadata(metadata: &HashMap<String, String>) -> Result<(), CatalogError> {
    if metadata.len() > MAX_METADATA_ENTRIES {
        return Err(CatalogError::InvalidInput(format!(
            "Metadata cannot exceed {} entries",
            MAX_METADATA_ENTRIES
        )));
    }
    Ok(())
}

pub(crate) fn validate_bucket_count(bucket_count: u32) -> Result<(), CatalogError> {
    if bucket_count == 0 || bucket_count > MAX_BUCKET_COUNT {
        return Err(CatalogError::InvalidInput(format!(
            "Bucket count must be 1-{}",
            MAX_BUCKET_COUNT
        )));
    }
    Ok(())
}
