use crate::config;

/// Public URL of a bundled image. Ids are file names relative to the asset
/// directory; a leading slash is tolerated.
pub fn asset_url(id: &str) -> String {
    format!("{}/{}", config::ASSET_BASE, id.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_asset_base() {
        assert_eq!(asset_url("sam-beach.webp"), "/assets/sam-beach.webp");
        assert_eq!(asset_url("/team/bentley.jpg"), "/assets/team/bentley.jpg");
    }
}
