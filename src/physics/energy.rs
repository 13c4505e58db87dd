/// Kinetic energy of the payload at touchdown (J).
pub fn impact_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}
