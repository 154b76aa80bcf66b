//! Mashery V3 resource catalog registered by [`EndpointRegistry::catalog`].
//!
//! Templates are relative to the resource base path (`/v3/rest` by default).

// self
use crate::registry::HttpMethod::{self, Delete, Get, Post, Put};
#[cfg(doc)] use crate::registry::EndpointRegistry;

/// `(operation name, path template, verb)` rows for every built-in operation.
#[rustfmt::skip]
pub const CATALOG: &[(&str, &str, HttpMethod)] = &[
	// Services
	("fetch_all_services", "/services", Get),
	("fetch_service", "/services/${id}", Get),
	("create_service", "/services", Post),
	("update_service", "/services/${id}", Put),
	("delete_service", "/services/${id}", Delete),
	// Service Endpoints
	("fetch_all_service_endpoints", "/services/${id}/endpoints", Get),
	("fetch_service_endpoint", "/services/${serviceId}/endpoints/${id}", Get),
	("create_service_endpoint", "/services/${serviceId}/endpoints", Post),
	("update_service_endpoint", "/services/${serviceId}/endpoints/${id}", Put),
	("delete_service_endpoint", "/services/${serviceId}/endpoints/${id}", Delete),
	// Endpoint Methods
	("fetch_all_endpoint_methods", "/services/${serviceId}/endpoints/${endpointId}/methods", Get),
	("fetch_endpoint_method", "/services/${serviceId}/endpoints/${endpointId}/methods/${id}", Get),
	("create_endpoint_method", "/services/${serviceId}/endpoints/${endpointId}/methods", Post),
	("update_endpoint_method", "/services/${serviceId}/endpoints/${endpointId}/methods/${id}", Put),
	("delete_endpoint_method", "/services/${serviceId}/endpoints/${endpointId}/methods/${id}", Delete),
	// Response Filters
	("fetch_all_response_filters", "/services/${serviceId}/endpoints/${endpointId}/methods/${methodId}/responseFilters", Get),
	("fetch_response_filter", "/services/${serviceId}/endpoints/${endpointId}/methods/${methodId}/responseFilters/${id}", Get),
	("create_response_filter", "/services/${serviceId}/endpoints/${endpointId}/methods/${methodId}/responseFilters", Post),
	("update_response_filter", "/services/${serviceId}/endpoints/${endpointId}/methods/${methodId}/responseFilters/${id}", Put),
	("delete_response_filter", "/services/${serviceId}/endpoints/${endpointId}/methods/${methodId}/responseFilters/${id}", Delete),
	// Endpoint scheduled maintenance
	("fetch_scheduled_event", "/services/${serviceId}/endpoints/${endpointId}/scheduledMaintenanceEvent", Get),
	("create_scheduled_event", "/services/${serviceId}/endpoints/${endpointId}/scheduledMaintenanceEvent", Post),
	("update_scheduled_event", "/services/${serviceId}/endpoints/${endpointId}/scheduledMaintenanceEvent", Put),
	("delete_scheduled_event", "/services/${serviceId}/endpoints/${endpointId}/scheduledMaintenanceEvent", Delete),
	// Endpoint Cache
	("fetch_endpoint_cache", "/services/${serviceId}/endpoints/${endpointId}/cache", Get),
	("create_endpoint_cache", "/services/${serviceId}/endpoints/${endpointId}/cache", Post),
	("update_endpoint_cache", "/services/${serviceId}/endpoints/${endpointId}/cache", Put),
	("delete_endpoint_cache", "/services/${serviceId}/endpoints/${endpointId}/cache", Delete),
	// CORS
	("fetch_cors", "/services/${serviceId}/endpoints/${endpointId}/cors", Get),
	("create_cors", "/services/${serviceId}/endpoints/${endpointId}/cors", Post),
	("update_cors", "/services/${serviceId}/endpoints/${endpointId}/cors", Put),
	("delete_cors", "/services/${serviceId}/endpoints/${endpointId}/cors", Delete),
	// System Domain Auth
	("fetch_sys_auth", "/services/${serviceId}/endpoints/${endpointId}/systemDomainAuthentication", Get),
	("create_sys_auth", "/services/${serviceId}/endpoints/${endpointId}/systemDomainAuthentication", Post),
	("update_sys_auth", "/services/${serviceId}/endpoints/${endpointId}/systemDomainAuthentication", Put),
	("delete_sys_auth", "/services/${serviceId}/endpoints/${endpointId}/systemDomainAuthentication", Delete),
	// Security Profile
	("fetch_security_profile", "/services/${serviceId}/securityProfile", Get),
	("create_security_profile", "/services/${serviceId}/securityProfile", Post),
	("update_security_profile", "/services/${serviceId}/securityProfile", Put),
	("delete_security_profile", "/services/${serviceId}/securityProfile", Delete),
	// Security Profile - OAuth
	("fetch_security_profile_oauth", "/services/${serviceId}/securityProfile/oauth", Get),
	("create_security_profile_oauth", "/services/${serviceId}/securityProfile/oauth", Post),
	("update_security_profile_oauth", "/services/${serviceId}/securityProfile/oauth", Put),
	("delete_security_profile_oauth", "/services/${serviceId}/securityProfile/oauth", Delete),
	// Service Cache
	("fetch_service_cache", "/services/${serviceId}/cache", Get),
	("create_service_cache", "/services/${serviceId}/cache", Post),
	("update_service_cache", "/services/${serviceId}/cache", Put),
	("delete_service_cache", "/services/${serviceId}/cache", Delete),
	// Service Roles
	("fetch_all_service_roles", "/services/${id}/roles", Get),
	("fetch_service_role", "/services/${serviceId}/roles/${id}", Get),
	("create_service_role", "/services/${serviceId}/roles", Post),
	("update_service_role", "/services/${serviceId}/roles/${id}", Put),
	("delete_service_role", "/services/${serviceId}/roles/${id}", Delete),
	// Error Sets
	("fetch_all_service_error_sets", "/services/${id}/errorSets", Get),
	("fetch_service_error_set", "/services/${serviceId}/errorSets/${id}", Get),
	("create_service_error_set", "/services/${serviceId}/errorSets", Post),
	("update_service_error_set", "/services/${serviceId}/errorSets/${id}", Put),
	("delete_service_error_set", "/services/${serviceId}/errorSets/${id}", Delete),
	// Error Messages
	("fetch_all_error_messages", "/services/${serviceId}/errorSets/${errorSetId}/errorMessages", Get),
	("fetch_error_message", "/services/${serviceId}/errorSets/${errorSetId}/errorMessages/${id}", Get),
	("create_error_message", "/services/${serviceId}/errorSets/${errorSetId}/errorMessages", Post),
	("update_error_message", "/services/${serviceId}/errorSets/${errorSetId}/errorMessages/${id}", Put),
	("delete_error_message", "/services/${serviceId}/errorSets/${errorSetId}/errorMessages/${id}", Delete),
	// Packages
	("fetch_all_packages", "/packages", Get),
	("fetch_package", "/packages/${id}", Get),
	("create_package", "/packages", Post),
	("update_package", "/packages/${id}", Put),
	("delete_package", "/packages/${id}", Delete),
	// Package Keys
	("fetch_all_package_keys", "/packageKeys", Get),
	("fetch_package_key", "/packageKeys/${id}", Get),
	("update_package_key", "/packageKeys/${id}", Put),
	("delete_package_key", "/packageKeys/${id}", Delete),
	// Plans
	("fetch_all_plans", "/packages/${packageId}/plans", Get),
	("fetch_plan", "/packages/${packageId}/plans/${id}", Get),
	("create_plan", "/packages/${packageId}/plans", Post),
	// Plan Services
	("fetch_all_plan_services", "/packages/${packageId}/plans/${planId}/services", Get),
	("fetch_all_plan_services_for_service", "/packages/${packageId}/plans/${planId}/services/${id}", Get),
	("create_plan_service", "/packages/${packageId}/plans/${planId}/services", Post),
	("create_plan_endpoint", "/packages/${packageId}/plans/${planId}/services/${serviceId}/endpoints", Post),
	("create_plan_method", "/packages/${packageId}/plans/${planId}/services/${serviceId}/endpoints/${endpointId}/methods", Post),
	// Domains
	("fetch_all_domains", "/domains", Get),
	("fetch_domain", "/domains/${id}", Get),
	("create_domain", "/domains", Post),
	// Public Domains
	("fetch_public_domains", "/domains/public", Get),
	// Public FQDN
	("fetch_public_domain_fqdns", "/domains/public/hostnames", Get),
	// System Domains
	("fetch_system_domains", "/domains/system", Get),
	// Roles
	("fetch_all_roles", "/roles", Get),
	// Scheduled Maintenance Events
	("fetch_all_scheduled_maintenance", "/scheduledMaintenanceEvents", Get),
	("fetch_scheduled_maintenance", "/scheduledMaintenanceEvents/${id}", Get),
	("create_scheduled_maintenance", "/scheduledMaintenanceEvents", Post),
	("update_scheduled_maintenance", "/scheduledMaintenanceEvents/${id}", Put),
	("delete_scheduled_maintenance", "/scheduledMaintenanceEvents/${id}", Delete),
	// Scheduled Maintenance Event Endpoints
	("fetch_all_scheduled_maintenance_endpoints", "/scheduledMaintenanceEvents/${maintenanceId}/endpoints", Get),
	("fetch_scheduled_maintenance_endpoint", "/scheduledMaintenanceEvents/${maintenanceId}/endpoints/${id}", Get),
	("create_scheduled_maintenance_endpoint", "/scheduledMaintenanceEvents/${maintenanceId}/endpoints", Post),
	("update_scheduled_maintenance_endpoint", "/scheduledMaintenanceEvents/${maintenanceId}/endpoints/${id}", Put),
	("delete_scheduled_maintenance_endpoint", "/scheduledMaintenanceEvents/${maintenanceId}/endpoints/${id}", Delete),
	// Email Sets
	("fetch_all_email_template_sets", "/emailTemplateSets", Get),
	("fetch_email_template_set", "/emailTemplateSets/${id}", Get),
	("create_email_template_set", "/emailTemplateSets", Post),
	("update_email_template_set", "/emailTemplateSets/${id}", Put),
	("delete_email_template_set", "/emailTemplateSets/${id}", Delete),
	// Email Templates
	("fetch_all_email_templates", "/emailTemplateSets/${emailSetId}/emailTemplates", Get),
	("fetch_email_template", "/emailTemplateSets/${emailSetId}/emailTemplates/${id}", Get),
	("create_email_template", "/emailTemplateSets/${emailSetId}/emailTemplates", Post),
	("update_email_template", "/emailTemplateSets/${emailSetId}/emailTemplates/${id}", Put),
	("delete_email_template", "/emailTemplateSets/${emailSetId}/emailTemplates/${id}", Delete),
];
