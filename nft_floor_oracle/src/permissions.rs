multiversx_sc::imports!();

use crate::{errors::UNAUTHORIZED_ERROR, structs::Role};

/// Role checks backing every gated endpoint.
///
/// Feeders pass two independent layers: membership in the feeder registry and a live
/// `Updater` role. Revoking either one stops the feeder on the next call.
#[multiversx_sc::module]
pub trait PermissionsModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    fn has_role(&self, role: Role, address: &ManagedAddress) -> bool {
        self.role_members(role).contains(address)
    }

    fn is_authorized_feeder(&self, address: &ManagedAddress) -> bool {
        self.feeders().contains(address) && self.has_role(Role::Updater, address)
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), UNAUTHORIZED_ERROR);
    }

    fn require_admin(&self) {
        self.require_role(Role::Admin);
    }

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_admin();
        self.grant_role_unchecked(role, &account);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_admin();
        self.revoke_role_unchecked(role, &account);
    }

    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        self.revoke_role_unchecked(role, &caller);
    }

    fn grant_role_unchecked(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            let sender = self.blockchain().get_caller();
            self.role_granted_event(role, account, &sender);
        }
    }

    fn revoke_role_unchecked(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).swap_remove(account) {
            let sender = self.blockchain().get_caller();
            self.role_revoked_event(role, account, &sender);
        }
    }

    #[view(hasRole)]
    fn has_role_view(&self, role: Role, account: ManagedAddress) -> bool {
        self.has_role(role, &account)
    }

    #[view(isAuthorizedFeeder)]
    fn is_authorized_feeder_view(&self, account: ManagedAddress) -> bool {
        self.is_authorized_feeder(&account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }
}
