use crate::core::dynamics::models::CoreThermalEos;
use crate::core::dynamics::solver::{forward_euler_specific_thermal_energy, pressure_work_rate};
use crate::math::Real;

/// An equation of state closing the energy equation of a material.
pub trait ThermalEos: Send + Sync {
    /// The unclamped specific thermal energy this material reaches after a sub-step.
    ///
    /// `rate` excludes the pressure work, which each material adds from its own pressure at
    /// `density` and `prior`. Without velocity divergence this is `prior + rate * dt`.
    fn trial_specific_thermal_energy(
        &self,
        prior: Real,
        rate: Real,
        dt: Real,
        density: Real,
        velocity_divergence: Real,
    ) -> Real {
        let pressure_work = pressure_work_rate(
            self.pressure(density, prior),
            density,
            velocity_divergence,
        );
        forward_euler_specific_thermal_energy(prior, rate + pressure_work, dt)
    }
    fn pressure(&self, density: Real, specific_thermal_energy: Real) -> Real;
    fn sound_speed(&self, density: Real, specific_thermal_energy: Real) -> Real;
    fn to_core_model(&self) -> Option<CoreThermalEos>;
}
