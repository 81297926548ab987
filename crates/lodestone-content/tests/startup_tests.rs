//! Integration tests for assembling a [`Registries`] set the way a server does
//! at startup, then sharing it with readers.

use std::any::Any;
use std::sync::Arc;
use std::thread;

use lodestone_content::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("lodestone=debug")
        .try_init();
}

#[derive(Debug, Default)]
struct BookMeta {
    pages: Vec<String>,
}

impl Meta for BookMeta {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Item and block definitions, then the id table, in load order.
fn load(config: RegistryConfig) -> Result<Registries, ContentError> {
    let mut registries = Registries::new(config);

    for block in ["minecraft:air", "minecraft:stone", "minecraft:grass_block"] {
        registries.states_mut().register(BlockState::new(block))?;
    }
    for facing in ["north", "south", "east", "west"] {
        registries.states_mut().register(
            BlockState::new("minecraft:furnace")
                .with_property("facing", facing)
                .with_property("lit", "false"),
        )?;
    }
    registries.finish_blocks()?;

    registries.items_mut().register(
        Item::new("minecraft:writable_book")
            .with_component(CompoundTag::new().with("max_stack", 1))
            .with_meta_factory(|| Box::new(BookMeta::default()) as Box<dyn Meta>),
    );
    registries.bind_item_ids([
        ("minecraft:air", 0),
        ("minecraft:stone", 1),
        ("minecraft:grass_block", 2),
        ("minecraft:writable_book", 3),
    ])?;
    Ok(registries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn startup_populates_every_catalog() -> anyhow::Result<()> {
    init_tracing();
    let registries = load(RegistryConfig::default())?;

    assert_eq!(registries.states().len(), 7);
    assert_eq!(registries.blocks().len(), 4);
    assert!(registries.blocks().is_finalized());
    assert_eq!(registries.items().all().len(), 4);

    let book = registries
        .items()
        .by_id(3)
        .ok_or_else(|| anyhow::anyhow!("book unbound"))?;
    assert_eq!(book.key(), "minecraft:writable_book");
    assert!(book.create_meta_as::<BookMeta>().unwrap().pages.is_empty());
    Ok(())
}

#[test]
fn configured_default_covers_unknown_ids() -> anyhow::Result<()> {
    init_tracing();
    let registries = load(RegistryConfig::from_json(r#"{"default_item": "minecraft:stone"}"#)?)?;
    assert_eq!(registries.items().by_id(-1).unwrap().key(), "minecraft:stone");
    assert_eq!(registries.items().by_id(0).unwrap().key(), "minecraft:air");
    Ok(())
}

#[test]
fn config_naming_unknown_item_fails_load() {
    init_tracing();
    let err = load(RegistryConfig {
        default_item: Some("minecraft:nothing".to_owned()),
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "key 'minecraft:nothing' is not registered in the item registry"
    );
}

#[test]
fn finished_registries_are_shared_read_only() -> anyhow::Result<()> {
    init_tracing();
    let registries = Arc::new(load(RegistryConfig::default())?);
    let expected = registries.items().id_table().fingerprint();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registries = Arc::clone(&registries);
            thread::spawn(move || {
                let furnace = registries.blocks().by_key("minecraft:furnace").is_some();
                (furnace, registries.items().id_table().fingerprint())
            })
        })
        .collect();

    for handle in handles {
        let (furnace, fingerprint) = handle
            .join()
            .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
        assert!(furnace);
        assert_eq!(fingerprint, expected);
    }
    Ok(())
}
