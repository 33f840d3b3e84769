use std::fs;
use std::io::{self, Read};
use std::path::Path;

use fegen_core::SourceFile;
use fegen_lib::{Builder, Error, Manager, Result};

/// Read the parse tree from `path`, or from stdin when `path` is `-`.
pub fn load_source(path: &Path) -> Result<SourceFile> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Io {
                path: "<stdin>".to_owned(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?
    };
    Ok(SourceFile::from_json(&json)?)
}

/// Load and build the dialect description at `path`.
pub fn load_manager(path: &Path) -> Result<Manager> {
    let tree = load_source(path)?;
    let mut manager = Manager::new(tree.module.clone());
    Builder::new(&mut manager).build(&tree)?;
    log::info!(
        "built `{}`: {} custom types, {} operations, {} functions, {} rules",
        manager.module_name(),
        manager.custom_type_defs().count(),
        manager.operations().count(),
        manager.functions().count(),
        manager.rule_nodes().count()
    );
    Ok(manager)
}
