//! Turns the framework's backup declarations into a [`Configuration`].
//!
//! Kinds are translated in [`BackupKind::ALL`] order and entries in
//! declaration order, so both the output and the first reported error are
//! deterministic. Translation is all-or-nothing.

use crate::bridge::check::map_check;
use crate::bridge::cleanup::map_cleanup;
use crate::bridge::configuration::{BackupDefinition, Configuration};
use crate::bridge::crypt::map_crypt;
use crate::bridge::result_error::error::Error;
use crate::bridge::result_error::result::Result;
use crate::bridge::result_error::WithMsg;
use crate::bridge::source::{BackupKind, MappedSource};
use crate::bridge::store::{Block, ConfigStore};
use crate::bridge::sync::map_sync;
use crate::bridge::target::map_target;
use crate::bridge::translator_config::{TranslatorConfig, UnknownKindPolicy};
use getset::Getters;
use tracing::{debug, info, warn};
use validator::Validate;

#[derive(Clone, Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(Error::from)
            .with_msg("Translator config validation failed")?;
        Ok(Self { config })
    }

    pub fn translate(&self, store: &dyn ConfigStore) -> Result<Configuration> {
        let root = store.block(self.config.root())?;
        let filename = root.required_str(self.config.filename_key())?;
        self.check_unknown_kinds(&root)?;

        info!("Translating backup declarations from {:?}", root.path());
        let mut configuration = Configuration::new(filename);
        for kind in BackupKind::ALL {
            let Some(list) = root.optional(kind.key())? else {
                debug!("No {} declared", kind);
                continue;
            };

            for entry in list.entries()? {
                let backup = self.translate_entry(kind, &entry, store)?;
                debug!(
                    "Translated {} as backup {:?} with source {}",
                    entry.path(),
                    backup.name(),
                    backup.source().source_type()
                );
                configuration.push(backup);
            }
        }

        info!(
            "Translated {} backups for {:?}",
            configuration.backups().len(),
            configuration.filename()
        );
        Ok(configuration)
    }

    fn translate_entry(
        &self,
        kind: BackupKind,
        entry: &Block<'_>,
        store: &dyn ConfigStore,
    ) -> Result<BackupDefinition> {
        let MappedSource { name, source } = kind.mapper().map_source(entry, store, &self.config)?;

        Ok(BackupDefinition::builder()
            .name(name)
            .source(source)
            .target(map_target(entry)?)
            .maybe_check(map_check(entry)?)
            .maybe_sync(map_sync(entry, self.config.sync_provider())?)
            .maybe_cleanup(map_cleanup(entry)?)
            .maybe_crypt(map_crypt(entry)?)
            .build())
    }

    fn check_unknown_kinds(&self, root: &Block<'_>) -> Result<()> {
        let unknown = root
            .object()?
            .keys()
            .filter(|key| *key != self.config.filename_key() && BackupKind::from_key(key).is_none());

        for key in unknown {
            match self.config.unknown_kinds() {
                UnknownKindPolicy::Ignore => warn!("Ignoring unknown backup kind {:?}", key),
                UnknownKindPolicy::Reject => {
                    return Err(Error::UnknownKind {
                        kind: key.clone(),
                        path: root.child_path(key),
                    })
                }
            }
        }

        Ok(())
    }
}

/// Translates with the default Laravel layout.
pub fn translate(store: &dyn ConfigStore) -> Result<Configuration> {
    Translator::default().translate(store)
}
