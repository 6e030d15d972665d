//! Main release workflow orchestration
//!
//! The workflow is a straight line with early exits:
//!
//! 1. Preconditions: manifest, packaging tool, clean working tree
//! 2. Version discovery and the bump menu
//! 3. Clean, build and verify artifacts
//! 4. Publish (after confirmation)
//! 5. Annotated tag (after confirmation), never pushed
//!
//! Failures return the first error; declined confirmations return
//! [Outcome::Cancelled]. Nothing runs after either.

use log::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::build::{clean_artifacts, collect_artifacts};
use crate::config::Config;
use crate::domain::{tag_message, BumpChoice, SemanticVersion};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::manifest::Manifest;
use crate::tools::ToolRunner;
use crate::ui::{self, Prompter};
use std::path::Path;

/// Version control as seen by the workflow
pub enum VcsState<'a> {
    /// Working directory is inside a repository
    Available(&'a dyn Repository),
    /// No repository; carries the reason for the warning
    Unavailable(String),
}

/// Where the user stopped the release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPoint {
    DirtyWorkingTree,
    Publish,
}

/// Run state gathered while the workflow advances
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseContext {
    pub package: String,
    pub current_version: SemanticVersion,
    /// Best effort, informational only
    pub installed_version: Option<String>,
    pub next_version: SemanticVersion,
    pub artifacts: Vec<String>,
}

/// Result of a workflow run that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Released {
        context: ReleaseContext,
        tag: Option<String>,
    },
    Cancelled(CancelPoint),
}

/// Release workflow over injected collaborators
pub struct ReleaseWorkflow<'a> {
    config: &'a Config,
    root: &'a Path,
    tools: &'a dyn ToolRunner,
    vcs: VcsState<'a>,
    prompter: &'a dyn Prompter,
}

impl<'a> ReleaseWorkflow<'a> {
    pub fn new(
        config: &'a Config,
        root: &'a Path,
        tools: &'a dyn ToolRunner,
        vcs: VcsState<'a>,
        prompter: &'a dyn Prompter,
    ) -> Self {
        ReleaseWorkflow {
            config,
            root,
            tools,
            vcs,
            prompter,
        }
    }

    /// Run the whole release.
    ///
    /// # Returns
    /// * `Ok(Outcome::Released)` - Published, possibly tagged
    /// * `Ok(Outcome::Cancelled)` - The user declined a confirmation
    /// * `Err` - First failing step; later steps did not run
    pub fn run(&self) -> Result<Outcome> {
        if let Some(point) = self.check_preconditions()? {
            return Ok(Outcome::Cancelled(point));
        }

        let mut context = self.discover_versions()?;
        context.next_version = self.select_and_bump(&context)?;
        context.artifacts = self.build()?;
        ui::display_artifacts(&context.artifacts);

        let publish_prompt = format!(
            "Publish {} {} to the package index?",
            context.package, context.next_version
        );
        if !self.prompter.confirm(&publish_prompt)? {
            ui::display_status("Publish cancelled, nothing was uploaded.");
            return Ok(Outcome::Cancelled(CancelPoint::Publish));
        }

        self.publish(&context)?;

        let tag = self.create_tag(&context.next_version)?;
        info!(
            "release of {} {} finished",
            context.package, context.next_version
        );
        Ok(Outcome::Released { context, tag })
    }

    /// Manifest present, packaging tool present, working tree clean (or
    /// accepted dirty).
    fn check_preconditions(&self) -> Result<Option<CancelPoint>> {
        let manifest = self.config.manifest_path(self.root);
        if !manifest.is_file() {
            return Err(ReleaseError::ManifestNotFound(manifest));
        }

        let packager = &self.config.tools.packager;
        if !self.tools.is_available(packager) {
            return Err(ReleaseError::ToolNotFound(packager.clone()));
        }

        match &self.vcs {
            VcsState::Available(repo) => {
                let changes = repo.uncommitted_changes()?;
                if !changes.is_empty() {
                    ui::display_boundary_warning(&BoundaryWarning::uncommitted_changes(&changes));
                    if !self.prompter.confirm("Continue with uncommitted changes?")? {
                        ui::display_status("Release cancelled.");
                        return Ok(Some(CancelPoint::DirtyWorkingTree));
                    }
                }
            }
            VcsState::Unavailable(reason) => {
                ui::display_boundary_warning(&BoundaryWarning::NotAGitRepository {
                    reason: reason.clone(),
                });
            }
        }

        Ok(None)
    }

    fn discover_versions(&self) -> Result<ReleaseContext> {
        let manifest = Manifest::read(&self.config.manifest_path(self.root))?;
        let installed_version = manifest
            .name
            .as_deref()
            .and_then(|name| self.installed_version(name));

        ui::display_versions(
            manifest.display_name(),
            &manifest.version,
            installed_version.as_deref(),
        );

        Ok(ReleaseContext {
            package: manifest.display_name().to_string(),
            current_version: manifest.version,
            installed_version,
            next_version: manifest.version,
            artifacts: Vec::new(),
        })
    }

    /// Query the installer; any failure means "unknown".
    fn installed_version(&self, package: &str) -> Option<String> {
        let installer = &self.config.tools.installer;
        match self.tools.capture(installer, &["show", package], self.root) {
            Ok(output) => parse_installed_version(&output),
            Err(e) => {
                debug!("installed version of {} unknown: {}", package, e);
                None
            }
        }
    }

    fn select_and_bump(&self, context: &ReleaseContext) -> Result<SemanticVersion> {
        let current = context.current_version;
        let candidates = current.candidates()?;
        ui::display_bump_menu(&candidates);

        let answer = self.prompter.select("Choose an option (1-4):")?;
        let bump = match BumpChoice::from_input(&answer)? {
            BumpChoice::Skip => {
                ui::display_version_change(&current, &current, None);
                return Ok(current);
            }
            BumpChoice::Bump(bump) => bump,
        };

        self.tools.run(
            &self.config.tools.packager,
            &["version", bump.as_arg()],
            self.root,
        )?;

        let bumped = Manifest::read(&self.config.manifest_path(self.root))?.version;
        let expected = candidates.get(bump);
        if bumped != expected {
            warn!(
                "{} wrote version {} to the manifest, expected {}",
                self.config.tools.packager, bumped, expected
            );
        }

        ui::display_version_change(&current, &bumped, Some(bump));
        Ok(bumped)
    }

    fn build(&self) -> Result<Vec<String>> {
        let removed = clean_artifacts(self.root, &self.config.build)?;
        if !removed.is_empty() {
            ui::display_status(&format!(
                "Removed {} old artifact director{}",
                removed.len(),
                if removed.len() == 1 { "y" } else { "ies" }
            ));
        }

        ui::display_status("Building package...");
        self.tools
            .run(&self.config.tools.packager, &["build"], self.root)?;

        let artifacts = collect_artifacts(&self.root.join(&self.config.build.dist_dir))?;
        ui::display_success(&format!("Built {} artifact(s)", artifacts.len()));
        Ok(artifacts)
    }

    fn publish(&self, context: &ReleaseContext) -> Result<()> {
        ui::display_status("Publishing package...");
        self.tools
            .run(&self.config.tools.packager, &["publish"], self.root)?;

        let version = context.next_version.to_string();
        ui::display_success(&format!("Published {} {}", context.package, version));
        ui::display_release_summary(
            &context.package,
            &context.next_version,
            &self.config.publish.project_url(&context.package, &version),
        );
        Ok(())
    }

    fn create_tag(&self, version: &SemanticVersion) -> Result<Option<String>> {
        let name = self.config.tag.tag_pattern()?.format(version);
        if !self.prompter.confirm(&format!("Create git tag {}?", name))? {
            ui::display_status("Skipping tag creation.");
            return Ok(None);
        }

        let repo = match &self.vcs {
            VcsState::Available(repo) => repo,
            VcsState::Unavailable(reason) => {
                return Err(ReleaseError::vcs(format!(
                    "cannot create tag {}: {}",
                    name, reason
                )))
            }
        };

        let message = tag_message(&self.config.tag.message, version);
        repo.create_annotated_tag(&name, &message)?;
        ui::display_success(&format!("Created tag {}", name));
        ui::display_manual_push_instruction(&name, &self.config.tag.remote);
        Ok(Some(name))
    }
}

/// Pull the `Version:` field out of `pip show` style output
pub fn parse_installed_version(output: &str) -> Option<String> {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("version"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
