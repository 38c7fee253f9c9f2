//! Then steps for task store BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::then;

#[then("the list shows {total:u64} total, {completed:u64} completed and {pending:u64} pending")]
fn list_counts(
    world: &StoreWorld,
    total: u64,
    completed: u64,
    pending: u64,
) -> Result<(), eyre::Report> {
    let actual = (
        u64::try_from(world.store.total_count())?,
        u64::try_from(world.store.completed_count())?,
        u64::try_from(world.store.pending_count())?,
    );
    eyre::ensure!(
        actual == (total, completed, pending),
        "expected (total, completed, pending) = {:?}, found {actual:?}",
        (total, completed, pending)
    );
    Ok(())
}

#[then(r#"the first task is "{title}" described as "{description}""#)]
fn first_task_with_description(
    world: &StoreWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let first = world
        .store
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("the list is empty"))?;
    eyre::ensure!(first.title() == title, "unexpected title {}", first.title());
    eyre::ensure!(
        first.description() == Some(description.as_str()),
        "unexpected description {:?}",
        first.description()
    );
    Ok(())
}

#[then(r#"the first task is "{title}" without a description"#)]
fn first_task_without_description(world: &StoreWorld, title: String) -> Result<(), eyre::Report> {
    let first = world
        .store
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("the list is empty"))?;
    eyre::ensure!(first.title() == title, "unexpected title {}", first.title());
    eyre::ensure!(
        first.description().is_none(),
        "expected no description, found {:?}",
        first.description()
    );
    Ok(())
}

#[then(r#"that task is labelled "{label}""#)]
fn task_is_labelled(world: &StoreWorld, label: String) -> Result<(), eyre::Report> {
    let id = world.last_added()?;
    let task = world
        .store
        .get(&id)
        .ok_or_else(|| eyre::eyre!("task {id} is missing"))?;
    let actual = world.formatter.format_task(task);
    eyre::ensure!(actual == label, "expected label {label:?}, found {actual:?}");
    Ok(())
}
