//! Application-wide constants, including the template-skeleton contract.

/// Application display name
pub const APP_NAME: &str = "dtcgen";

/// Placeholder token replaced by the project name during assembly
pub const PLACEHOLDER: &str = "projectName";

/// Token replaced by a container's name in per-container template names
pub const CONTAINER_NAME_TOKEN: &str = "containerName";

/// Template-skeleton subdirectory holding the project tree
pub const PROJECT_TEMPLATE_DIR: &str = "project";

/// Optional template-root subdirectory holding shared partials
pub const PARTIALS_DIR: &str = "partials";

/// Reserved extension marking parameterized templates
pub const TEMPLATE_SUFFIX: &str = ".hbs";

// Asset catalog contract
/// Pattern of the catalog container directory name
pub const CATALOG_DIR_PATTERN: &str = "xcassets$";
/// Name of the generated-assets subtree inside the catalog
pub const GENERATED_ASSETS_DIR: &str = "DtcGenerated";
/// Per-directory manifest file name
pub const MANIFEST_FILE_NAME: &str = "Contents.json";
/// Suffix of per-image leaf containers (`<basename>.imageset`)
pub const IMAGE_ITEM_SUFFIX: &str = "imageset";
/// Manifest-template staging directory shipped inside the skeleton
pub const CATALOG_STAGING_DIR: &str = "intermediateDirectory";
/// Namespace-level manifest, copied as-is
pub const INTERMEDIATE_MANIFEST: &str = "midDirContents.json";
/// Directory holding the leaf manifest template
pub const LEAF_MANIFEST_DIR: &str = "iconName.imageset";
/// Leaf manifest template, rendered per image file
pub const LEAF_MANIFEST_TEMPLATE: &str = "lastDirContents.json.hbs";

// One-shot project templates (tolerated when absent)
/// Project manifest template
pub const PROJECT_MANIFEST_PATTERN: &str = r"^project\.yml\.hbs$";
/// Test-target scaffold templates
pub const TEST_TARGET_PATTERN: &str = "Tests.*hbs$";

// Per-run source templates (fatal when absent)
/// Per-container config template
pub const CONFIG_TEMPLATE_PATTERN: &str = r"^containerNameConfig\..+\.hbs$";
/// Per-container controller template
pub const CONTROLLER_TEMPLATE_PATTERN: &str = r"^containerNameViewController\..+\.hbs$";
/// Aggregate controller registry template
pub const REGISTRY_TEMPLATE_PATTERN: &str = r"^viewController\..+\.hbs$";
/// Aggregate tree consumer template
pub const TREE_CONSUMER_TEMPLATE_PATTERN: &str = r"^DesignToCode\.generated\..+\.hbs$";

/// Suffix appended to container names in the registry template context
pub const REGISTRY_NAME_SUFFIX: &str = "ViewController";

/// File name of the raw tree copy written for runtime consumption
pub const TREE_JSON_FILE: &str = "tree.json";

/// Dynamically-instantiated class names handed to the tree consumer
pub const DYNAMIC_CELL_CLASSES: &[&str] = &["cityCell", "HotelCell"];
