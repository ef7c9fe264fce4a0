use serde::{Deserialize, Serialize};

/// One remote file as described by the content-repository delivery API.
///
/// Only `@path`, `@id` and the name fields are interpreted by the download
/// logic; everything else the API returns (dimensions, extension, size,
/// child nodes) is carried through untouched in `extra`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssetDescriptor {
    /// Repository-rooted, slash-delimited path of the asset.
    #[serde(rename = "@path")]
    pub path: String,

    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AssetDescriptor {
    /// Name used for reporting, preferring the explicit `fileName` over the
    /// node name.
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_deserializes_with_extra_metadata() {
        let asset: AssetDescriptor = serde_json::from_str(
            r#"{
                "@name": "report.pdf",
                "@path": "/media/reports/2023/report.pdf",
                "@id": "b1946ac9",
                "@nodeType": "mgnl:asset",
                "fileName": "annual-report.pdf",
                "extension": "pdf",
                "size": 52133,
                "height": 0,
                "width": 0,
                "@nodes": []
            }"#,
        )
        .unwrap();

        assert_eq!(asset.path, "/media/reports/2023/report.pdf");
        assert_eq!(asset.id, "b1946ac9");
        assert_eq!(asset.display_name(), "annual-report.pdf");
        assert_eq!(asset.extra["extension"], "pdf");
        assert_eq!(asset.extra["size"], 52133);
        assert!(asset.extra.contains_key("@nodeType"));
    }

    #[test]
    fn test_display_name_falls_back_to_node_name() {
        let asset: AssetDescriptor = serde_json::from_str(
            r#"{ "@name": "logo.svg", "@path": "/media/logo.svg", "@id": "a1" }"#,
        )
        .unwrap();

        assert_eq!(asset.display_name(), "logo.svg");
    }

    #[test]
    fn test_descriptor_requires_path() {
        let result: Result<AssetDescriptor, _> =
            serde_json::from_str(r#"{ "@name": "logo.svg", "@id": "a1" }"#);
        assert!(result.is_err());
    }
}
