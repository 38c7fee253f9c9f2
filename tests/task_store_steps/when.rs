//! When steps for task store BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::when;

#[when(r#"the user adds the task "{title}" described as "{description}""#)]
fn add_task_with_description(world: &mut StoreWorld, title: String, description: String) {
    world.last_added = world.store.add_task(&title, Some(description.as_str()));
}

#[when("the user submits a blank title")]
fn submit_blank_title(world: &mut StoreWorld) {
    world.last_added = world.store.add_task("   ", None);
}

#[when("the user toggles that task")]
fn toggle_that_task(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let id = world.last_added()?;
    eyre::ensure!(world.store.toggle_complete(&id), "toggle matched no task");
    Ok(())
}

#[when("the user deletes that task")]
fn delete_that_task(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let id = world.last_added()?;
    eyre::ensure!(world.store.delete_task(&id), "delete matched no task");
    Ok(())
}
