use std::sync::Arc;

use crate::component::{ComponentDescriptor, ComponentRegistrar, DescriptorBuilder, ImplementationId, RoleResolver};
use crate::config::BootstrapConfig;
use crate::introspection::{TypeIntrospector, TypeTable};
use crate::kernel::constants;
use crate::kernel::error::{BootstrapPhase, Error, Result};
use crate::manifest::{ManifestReader, SearchPath};

/// Outcome of a successful bootstrap pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Number of manifest entries processed, duplicates included
    pub implementations: usize,
    /// Number of descriptors handed to the registrar
    pub descriptors: usize,
    /// Implementations that serve no role and were not registered
    pub skipped: Vec<ImplementationId>,
}

/// Discovers the declared components and registers one descriptor per
/// (implementation, role) pair.
///
/// The pass is all-or-nothing for discovery: the manifest is read and every
/// descriptor is built before the first registration, so a failure there
/// leaves the registrar untouched. A registration rejected by the registrar
/// stops the pass at that descriptor.
#[derive(Debug, Clone)]
pub struct ComponentLoader {
    reader: ManifestReader,
    introspector: Arc<dyn TypeIntrospector>,
    resolver: RoleResolver,
    builder: DescriptorBuilder,
}

impl ComponentLoader {
    /// Creates a loader with the default hint.
    pub fn new(reader: ManifestReader, introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self {
            reader,
            introspector,
            resolver: RoleResolver::new(),
            builder: DescriptorBuilder::new(constants::DEFAULT_HINT),
        }
    }

    /// Replace the descriptor builder, e.g. to change the default hint
    pub fn with_builder(mut self, builder: DescriptorBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Assemble the whole pipeline from configuration: a search path over the
    /// configured roots and the configured type tables merged in order.
    pub fn from_config(config: &BootstrapConfig) -> Result<Self> {
        let mut table = TypeTable::new();
        for path in &config.type_tables {
            table.extend(TypeTable::from_file(path)?)?;
        }
        log::info!("Loaded {} types from {} type table(s)", table.len(), config.type_tables.len());

        let reader = ManifestReader::new(Arc::new(SearchPath::new(config.search_path.iter().cloned())))
            .with_resource_name(config.manifest_name.clone())
            .with_line_policy(config.line_policy);

        Ok(Self::new(reader, Arc::new(table)).with_builder(DescriptorBuilder::new(&config.default_hint)))
    }

    pub fn reader(&self) -> &ManifestReader {
        &self.reader
    }

    pub fn introspector(&self) -> &dyn TypeIntrospector {
        self.introspector.as_ref()
    }

    /// Discover every declared component and build its descriptors without
    /// registering anything.
    pub fn plan(&self) -> Result<(Vec<ComponentDescriptor>, BootstrapReport)> {
        let implementations = self
            .reader
            .list_declared_implementations()
            .map_err(|e| Error::bootstrap(BootstrapPhase::ReadManifest, None, e))?;
        log::info!(
            "Found {} declared component implementation(s) in '{}'",
            implementations.len(),
            self.reader.resource_name()
        );

        let mut report = BootstrapReport {
            implementations: implementations.len(),
            ..BootstrapReport::default()
        };
        let mut descriptors = Vec::new();

        for implementation in &implementations {
            let roles = self
                .resolver
                .resolve_roles(self.introspector.as_ref(), implementation)
                .map_err(|e| Error::bootstrap(BootstrapPhase::ResolveRoles, Some(implementation.as_str()), e))?;

            if roles.is_empty() {
                log::debug!("'{}' serves no component role, skipping", implementation);
                report.skipped.push(implementation.clone());
                continue;
            }

            for role in &roles {
                let descriptor = self
                    .builder
                    .build(self.introspector.as_ref(), implementation, role)
                    .map_err(|e| Error::bootstrap(BootstrapPhase::BuildDescriptor, Some(implementation.as_str()), e))?;
                descriptors.push(descriptor);
            }
        }

        report.descriptors = descriptors.len();
        Ok((descriptors, report))
    }

    /// Run the bootstrap against `registrar`.
    ///
    /// Every failure is returned as a single [`Error::Bootstrap`] carrying the
    /// original cause.
    pub fn initialize(&self, registrar: &mut dyn ComponentRegistrar) -> Result<BootstrapReport> {
        let (descriptors, report) = self.plan()?;

        for descriptor in descriptors {
            log::debug!("Registering {}", descriptor);
            let implementation = descriptor.implementation().to_string();
            registrar
                .register_component(descriptor)
                .map_err(|e| Error::bootstrap(BootstrapPhase::Register, Some(implementation.as_str()), e))?;
        }

        log::info!(
            "Registered {} component descriptor(s) for {} implementation(s)",
            report.descriptors,
            report.implementations - report.skipped.len()
        );
        Ok(report)
    }
}
