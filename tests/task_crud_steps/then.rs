//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskdesk::task::{domain::TaskStatus, services::TaskErrorKind};

fn expected_kind(name: &str) -> Result<TaskErrorKind, eyre::Report> {
    match name {
        "InvalidId" => Ok(TaskErrorKind::InvalidId),
        "InvalidTitle" => Ok(TaskErrorKind::InvalidTitle),
        "InvalidStatus" => Ok(TaskErrorKind::InvalidStatus),
        "NotFound" => Ok(TaskErrorKind::NotFound),
        "Internal" => Ok(TaskErrorKind::Internal),
        other => Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    }
}

#[then(r#"reading the task back returns title "{title}""#)]
fn read_back_title(world: &TaskCrudWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let fetched = run_async(world.service.get(id.as_str())).wrap_err("read task back")?;
    eyre::ensure!(
        fetched.title().as_str() == title,
        "expected title {title:?}, found {:?}",
        fetched.title().as_str()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskCrudWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then("the task timestamps are equal")]
fn timestamps_equal(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "created_at and updated_at differ"
    );
    Ok(())
}

#[then("the task was updated after it was created")]
fn updated_after_created(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.updated_at() > task.created_at(),
        "updated_at did not advance past created_at"
    );
    Ok(())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err}")),
        None => Err(eyre::eyre!("missing operation result")),
    }
}

#[then(r#"the operation fails with "{kind}""#)]
fn operation_fails_with(world: &TaskCrudWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = expected_kind(&kind)?;
    match world.last_result.as_ref() {
        Some(Err(err)) if err.kind() == expected => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected {expected:?}, got {:?}", err.kind())),
        Some(Ok(())) => Err(eyre::eyre!(
            "expected {expected:?}, but the operation succeeded"
        )),
        None => Err(eyre::eyre!("missing operation result")),
    }
}
