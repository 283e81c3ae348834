use crate::error::InvalidArgument;
use crate::params::{StopRegionParams, UpdateProgramParams, UpdateTransactionParams};
use crate::query::{QueryBuilder, ResourceRequest};
use crate::resource::{REGION, ResourceKind, STOP};

use super::status_update;

/// Encode a stop-program request. Without explicit `stop` keywords the
/// request stops scheduling (`stop=SCHD`).
///
/// # Errors
///
/// Returns [`InvalidArgument`] when `names` is missing or its first entry is blank.
pub fn stop_program(params: &UpdateProgramParams) -> Result<ResourceRequest, InvalidArgument> {
    let names = params.validate()?;
    tracing::debug!(?params, "encoding stop program");
    Ok(status_update(
        ResourceKind::Program,
        names,
        STOP,
        params.stop.as_deref(),
        params.route.as_deref(),
    ))
}

/// Encode a stop-transaction request.
///
/// # Errors
///
/// Returns [`InvalidArgument`] when `names` is missing or its first entry is blank.
pub fn stop_transaction(
    params: &UpdateTransactionParams,
) -> Result<ResourceRequest, InvalidArgument> {
    let names = params.validate()?;
    tracing::debug!(?params, "encoding stop transaction");
    Ok(status_update(
        ResourceKind::Transaction,
        names,
        STOP,
        params.stop.as_deref(),
        params.route.as_deref(),
    ))
}

/// Encode a stop-region request:
/// `regNum → jobname → abdump → transaction → cancel`.
///
/// # Errors
///
/// Returns [`InvalidArgument`] unless exactly one of `reg_num` and `job_name` is set.
pub fn stop_region(params: &StopRegionParams) -> Result<ResourceRequest, InvalidArgument> {
    params.validate()?;
    tracing::debug!(?params, "encoding stop region");

    let mut query = QueryBuilder::new();
    if let Some(reg_num) = &params.reg_num {
        query.joined("regNum", reg_num);
    }
    query
        .opt_scalar("jobname", params.job_name.as_deref())
        .opt_scalar("abdump", params.abdump.as_deref())
        .opt_scalar("transaction", params.transaction.as_deref())
        .scalar("cancel", if params.cancel { "true" } else { "false" });
    Ok(query.build(format!("/{REGION}/{STOP}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stop_program_sends_an_explicit_empty_stop_list() {
        let params = UpdateProgramParams {
            names: Some(vec!["PGM1".into()]),
            stop: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            stop_program(&params).unwrap().to_string(),
            "/program?names=PGM1&stop="
        );
    }

    #[test]
    fn stop_transaction_defaults_to_schd() {
        let params = UpdateTransactionParams {
            names: Some(vec!["TRAN1".into()]),
            ..Default::default()
        };
        assert_eq!(
            stop_transaction(&params).unwrap().to_string(),
            "/transaction?names=TRAN1&stop=SCHD"
        );
    }

    #[test]
    fn stop_program_uses_explicit_keywords() {
        let params = UpdateProgramParams {
            names: Some(vec!["PGM1".into(), "PGM2".into()]),
            stop: Some(vec!["SCHD".into(), "TRACE".into()]),
            ..Default::default()
        };
        assert_eq!(
            stop_program(&params).unwrap().to_string(),
            "/program?names=PGM1,PGM2&stop=SCHD,TRACE"
        );
    }

    #[test]
    fn stop_program_without_names_fails() {
        assert!(matches!(
            stop_program(&UpdateProgramParams::default()),
            Err(InvalidArgument::MissingNames { .. })
        ));
    }

    #[test]
    fn stop_region_by_numbers() {
        let params = StopRegionParams {
            reg_num: Some(vec![1, 2]),
            cancel: true,
            ..Default::default()
        };
        assert_eq!(
            stop_region(&params).unwrap().to_string(),
            "/region/stop?regNum=1%2C2&cancel=true"
        );
    }

    #[test]
    fn stop_region_by_job_with_every_option() {
        let params = StopRegionParams {
            job_name: Some("MPP 1".into()),
            abdump: Some("TRAN1".into()),
            transaction: Some("WFI1".into()),
            ..Default::default()
        };
        assert_eq!(
            stop_region(&params).unwrap().to_string(),
            "/region/stop?jobname=MPP%201&abdump=TRAN1&transaction=WFI1&cancel=false"
        );
    }

    #[test]
    fn stop_region_rejects_both_selectors() {
        let params = StopRegionParams {
            reg_num: Some(vec![1]),
            job_name: Some("JOB1".into()),
            cancel: false,
            ..Default::default()
        };
        assert_eq!(
            stop_region(&params),
            Err(InvalidArgument::RegionSelectorConflict)
        );
    }
}
