//! Formula manifest types and the built-in `enhance-this` recipe.

use serde::{Deserialize, Serialize};

/// A Homebrew formula for a Python CLI installed into a virtualenv.
///
/// Mirrors `packaging/<name>.yaml`. Unknown fields in the YAML are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// Formula name (e.g. "enhance-this"); also determines the Ruby class name.
    pub name: String,

    /// One-line description shown by `brew info`.
    pub desc: String,

    /// Project homepage.
    pub homepage: String,

    /// Source archive URL.
    pub url: String,

    /// SHA-256 of the source archive (lowercase hex).
    pub sha256: String,

    /// The source URL is a stand-in until the first tagged release.
    #[serde(default)]
    pub provisional: bool,

    /// Packages the formula depends on, in declaration order.
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Pinned dependency archives installed into the virtualenv.
    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Post-install smoke test.
    #[serde(default)]
    pub test: SmokeTest,
}

/// A pinned dependency archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub sha256: String,
}

/// Command run by `brew test`: `#{bin}/<command> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeTest {
    /// Installed executable name.
    #[serde(default = "default_test_command")]
    pub command: String,

    /// Arguments; the default asks for the version.
    #[serde(default = "default_test_args")]
    pub args: Vec<String>,
}

impl Default for SmokeTest {
    fn default() -> Self {
        Self {
            command: default_test_command(),
            args: default_test_args(),
        }
    }
}

fn default_test_command() -> String {
    "enhance".to_string()
}

fn default_test_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// Checksum used before a release archive exists.
pub const PLACEHOLDER_SHA256: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

impl Resource {
    fn pinned(name: &str, url: &str, sha256: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            sha256: sha256.to_string(),
        }
    }
}

impl Formula {
    /// The `enhance-this` 0.1.0 recipe.
    ///
    /// The source archive is provisional and carries a placeholder checksum;
    /// the resource pins are real.
    pub fn enhance_this() -> Self {
        Self {
            name: "enhance-this".to_string(),
            desc: "CLI tool to enhance prompts using Ollama AI".to_string(),
            homepage: "https://github.com/hariharen9/enhance-this".to_string(),
            url: "https://github.com/hariharen9/enhance-this/archive/v0.1.0.tar.gz".to_string(),
            sha256: PLACEHOLDER_SHA256.to_string(),
            provisional: true,
            depends_on: vec!["python@3.11".to_string()],
            resources: vec![
                Resource::pinned(
                    "click",
                    "https://pypi.io/packages/source/c/click/click-8.1.7.tar.gz",
                    "ca9853ad459e78b31683208753b81ece57b6b4863e0330d93a8a47e08b485497",
                ),
                Resource::pinned(
                    "requests",
                    "https://pypi.io/packages/source/r/requests/requests-2.31.0.tar.gz",
                    "942c3a62805036524852309990243c27a03575b2342c06f735638df83343ed91",
                ),
                Resource::pinned(
                    "pyyaml",
                    "https://pypi.io/packages/source/P/PyYAML/PyYAML-6.0.1.tar.gz",
                    "565d219cb938e6c18298551b4a4b39709b3f0a54218e4a855a45dc1b8a2c8a5b",
                ),
                Resource::pinned(
                    "pyperclip",
                    "https://pypi.io/packages/source/p/pyperclip/pyperclip-1.8.2.tar.gz",
                    "b9c60536f60b2a157b4f67c3c15c11c053f745344c365534403c95a89c0013c7",
                ),
                Resource::pinned(
                    "rich",
                    "https://pypi.io/packages/source/r/rich/rich-13.7.1.tar.gz",
                    "a2d38e15f2a3648427a0f423e0651412a6b797153a5471f03f3139a625591ce7",
                ),
                Resource::pinned(
                    "questionary",
                    "https://pypi.io/packages/source/q/questionary/questionary-2.0.1.tar.gz",
                    "313461388279236405d834b9c3699018a4646435415c668b8a3a663c45148668",
                ),
            ],
            test: SmokeTest::default(),
        }
    }
}
