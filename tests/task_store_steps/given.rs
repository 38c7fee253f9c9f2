//! Given steps for task store BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_empty(), "expected a fresh store");
    Ok(())
}

#[given(r#"a task titled "{title}" has been added"#)]
fn task_has_been_added(world: &mut StoreWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .store
        .add_task(&title, None)
        .ok_or_else(|| eyre::eyre!("store rejected task titled {title:?}"))?;
    world.last_added = Some(id);
    Ok(())
}
