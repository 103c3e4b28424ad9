use serde_json::Value;
use soar_core::{
    ActionCall, ActionDescriptor, ActionFailure, ActionOutcome, InstanceId, ManualActionRequest,
    ScriptParameters, TargetSelection,
};
use tracing::{debug, error, instrument, warn};

use crate::backend::SoarBackend;
use crate::bindings::Bindings;

/// Run one marketplace action.
///
/// Resolves the target selection, looks up the integration instance,
/// packages the action parameters and executes the action. Every failure is
/// returned as [`ActionOutcome::Failed`]; nothing escapes as an error.
#[instrument(
    skip_all,
    fields(integration = descriptor.integration, action = descriptor.name, case_id = %call.case_id)
)]
pub async fn invoke_action<B: SoarBackend>(
    bindings: &Bindings<B>,
    descriptor: &ActionDescriptor,
    call: ActionCall,
) -> ActionOutcome {
    match run(bindings, descriptor, call).await {
        Ok(response) => ActionOutcome::Completed(response),
        Err(failure) => ActionOutcome::Failed(failure),
    }
}

async fn run<B: SoarBackend>(
    bindings: &Bindings<B>,
    descriptor: &ActionDescriptor,
    call: ActionCall,
) -> Result<Value, ActionFailure> {
    let ActionCall {
        case_id,
        alert_group_identifiers,
        target_entities,
        scope,
        arguments,
    } = call;

    let selection = TargetSelection::resolve(target_entities, &scope, bindings.scopes())
        .inspect_err(|_| debug!(%scope, "rejected scope"))?;

    let instance = resolve_instance(bindings.backend(), descriptor.integration).await?;

    let parameters = ScriptParameters::collect(descriptor, &arguments);
    let request = ManualActionRequest::new(
        descriptor,
        case_id,
        alert_group_identifiers,
        selection,
        instance,
        parameters,
    );

    bindings
        .backend()
        .execute_manual_action(&request)
        .await
        .map_err(|e| {
            error!(
                integration = descriptor.integration,
                action = descriptor.name,
                error = %e,
                "action execution failed"
            );
            ActionFailure::ActionExecutionFailed(e.to_string())
        })
}

/// Pick the instance an action runs on. The first instance listed wins.
pub async fn resolve_instance<B: SoarBackend>(
    backend: &B,
    integration: &str,
) -> Result<InstanceId, ActionFailure> {
    let instances = backend
        .list_integration_instances(integration)
        .await
        .map_err(|e| {
            error!(integration, error = %e, "error fetching integration instance");
            ActionFailure::InstanceLookupFailed(e.to_string())
        })?;

    let Some(first) = instances.instances().first() else {
        warn!(integration, "no active integration instance");
        return Err(ActionFailure::NoActiveInstance);
    };

    let identifier = first
        .identifier()
        .ok_or(ActionFailure::InstanceIdentifierMissing)?;
    debug!(integration, instance = identifier, "resolved integration instance");
    Ok(InstanceId::new(identifier))
}
