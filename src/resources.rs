// Assets embedded into the binary at compile time.
//
// Paths are relative to this file; the files live under `resources/` at the
// crate root.

use crate::models::GradleBundle;

/// A static file copied byte for byte into generated projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticResource {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// A Handlebars template rendered against the mod configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSource {
    pub name: &'static str,
    pub source: &'static str,
}

macro_rules! static_resource {
    ($path:literal) => {
        StaticResource {
            name: $path,
            bytes: include_bytes!(concat!("../resources/", $path)),
        }
    };
}

macro_rules! template_source {
    ($path:literal) => {
        TemplateSource {
            name: $path,
            source: include_str!(concat!("../resources/", $path)),
        }
    };
}

pub const GITIGNORE: StaticResource = static_resource!("gitignore.template");
pub const SETTINGS_GRADLE: StaticResource = static_resource!("settings.gradle");
pub const ICON: StaticResource = static_resource!("cobblestone.png");

pub const GRADLE_PROPERTIES: TemplateSource = template_source!("templates/gradle.properties.hbs");
pub const BUILD_GRADLE: TemplateSource = template_source!("templates/build.gradle.hbs");
pub const MAIN_CLASS: TemplateSource = template_source!("templates/init.java.hbs");

pub const LICENSE_MIT: TemplateSource = template_source!("licenses/MIT.txt.hbs");
pub const LICENSE_ISC: TemplateSource = template_source!("licenses/ISC.txt.hbs");
pub const LICENSE_BSD_2: TemplateSource = template_source!("licenses/BSD-2-Clause.txt.hbs");
pub const LICENSE_BSD_3: TemplateSource = template_source!("licenses/BSD-3-Clause.txt.hbs");
pub const LICENSE_UNLICENSE: TemplateSource = template_source!("licenses/Unlicense.txt.hbs");

/// The four files making up a Gradle wrapper
#[derive(Debug, Clone, Copy)]
pub struct WrapperBundle {
    pub script: StaticResource,
    pub batch: StaticResource,
    pub jar: StaticResource,
    pub properties: StaticResource,
}

const GRADLE_7: WrapperBundle = WrapperBundle {
    script: static_resource!("gradle7/gradlew"),
    batch: static_resource!("gradle7/gradlew.bat"),
    jar: static_resource!("gradle7/gradle-wrapper.jar"),
    properties: static_resource!("gradle7/gradle-wrapper.properties"),
};

const GRADLE_8: WrapperBundle = WrapperBundle {
    script: static_resource!("gradle8/gradlew"),
    batch: static_resource!("gradle8/gradlew.bat"),
    jar: static_resource!("gradle8/gradle-wrapper.jar"),
    properties: static_resource!("gradle8/gradle-wrapper.properties"),
};

pub fn wrapper_bundle(bundle: GradleBundle) -> &'static WrapperBundle {
    match bundle {
        GradleBundle::Gradle7 => &GRADLE_7,
        GradleBundle::Gradle8 => &GRADLE_8,
    }
}
