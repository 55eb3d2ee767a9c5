//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskCrudWorld, title: String) {
    let result = run_async(world.service.create(&title));
    world.record(result);
}

#[when(r#"the task is updated with title "{title}" and status "{status}""#)]
fn update_task(
    world: &mut TaskCrudWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let result = run_async(world.service.update(id.as_str(), &title, &status));
    world.record(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    world.last_result = Some(run_async(world.service.delete(id.as_str())));
    Ok(())
}
