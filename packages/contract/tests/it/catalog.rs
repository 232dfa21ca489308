//! The full scenario catalog against the reference server.

use color_eyre::Result;
use contract::{Cleanup, Scenario};
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

use crate::helpers::TestFixture;

#[test_log::test(tokio::test)]
async fn every_scenario_passes_and_cleans_up() -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let reports = fixture.harness.run_all(Scenario::ALL).await;
    pretty_assert_eq!(reports.len(), Scenario::ALL.len());

    for report in reports {
        assert!(
            report.cleanup.is_clean(),
            "{}: {:?}",
            report.name,
            report.cleanup
        );
        report.into_result()?;
    }
    assert!(fixture.accounts.is_empty(), "no accounts are left behind");

    Ok(())
}

#[test_case(Scenario::CreateCourier; "create_courier")]
#[test_case(Scenario::CreateDuplicate; "create_duplicate")]
#[test_case(Scenario::LoginExisting; "login_existing")]
#[test_log::test(tokio::test)]
async fn registering_scenarios_remove_their_account(scenario: Scenario) -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let report = scenario.run(&fixture.harness).await;
    assert!(
        matches!(report.cleanup, Cleanup::Removed(_)),
        "{:?}",
        report.cleanup
    );
    report.into_result()?;
    assert!(fixture.accounts.is_empty());

    Ok(())
}

#[test_case(Scenario::CreateWithoutLogin; "create_without_login")]
#[test_case(Scenario::CreateWithoutPassword; "create_without_password")]
#[test_case(Scenario::LoginWithoutLogin; "login_without_login")]
#[test_case(Scenario::LoginNonexistent; "login_nonexistent")]
#[test_case(Scenario::DeleteExisting; "delete_existing")]
#[test_log::test(tokio::test)]
async fn other_scenarios_find_nothing_to_remove(scenario: Scenario) -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let report = scenario.run(&fixture.harness).await;
    assert!(
        matches!(report.cleanup, Cleanup::NothingToRemove { .. }),
        "{:?}",
        report.cleanup
    );
    report.into_result()?;
    assert!(fixture.diagnostics.contains("teardown: no account to remove"));

    Ok(())
}
