//! ECS системы first-person контроллера
//!
//! Архитектура:
//! - Init: разрешаем камеру, запоминаем rest height, просим cursor capture
//! - Sample: host заполняет FrameInput (client / scripted)
//! - Tick: movement → look → bob через `controller::tick`
//!
//! Всё в Update: контроллер живёт в ритме кадров, dt = Time::delta_secs().
//! dt не clamp'им — это решение host'а.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{KinematicCharacterController, KinematicCharacterControllerOutput};

use crate::components::{
    ControllerFault, CursorCaptureEvents, CursorCaptureRequested, FirstPersonCamera, FlatGround,
    FlatGroundMover, Player, PlayerCamera,
};
use crate::controller::{
    self, CharacterMover, ControllerState, FirstPersonConfig, FrameInput, InitError, TickReport,
};
use crate::{log, log_error, log_info, log_warning};

/// Порядок систем контроллера внутри Update
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstPersonSet {
    /// Инициализация новых контроллеров
    Init,
    /// Заполнение FrameInput (client / scripted)
    Sample,
    /// Per-frame тик
    Tick,
}

/// Mover поверх Rapier KinematicCharacterController
///
/// Grounded — из output прошлого physics step (своего флага не держим).
pub struct RapierMover<'a> {
    pub controller: &'a mut KinematicCharacterController,
    pub grounded: bool,
}

impl CharacterMover for RapierMover<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        // Rapier применит sweep + slide в physics step
        self.controller.translation = Some(displacement);
    }
}

/// Система инициализации контроллеров
///
/// Для каждого тела с config, но без state:
/// - mover и камера найдены → ControllerState + CursorCaptureRequested
/// - нет mover'а (FlatGround / KinematicCharacterController) или камеры
///   → ControllerFault (больше не трогаем)
pub fn init_first_person_controllers(
    mut commands: Commands,
    bodies: Query<
        (
            Entity,
            &FirstPersonConfig,
            Option<&FirstPersonCamera>,
            Has<FlatGround>,
            Has<KinematicCharacterController>,
        ),
        (Without<ControllerState>, Without<ControllerFault>),
    >,
    cameras: Query<&Transform, With<PlayerCamera>>,
    mut cursor_events: EventWriter<CursorCaptureRequested>,
) {
    for (body, config, camera_link, has_flat_ground, has_rapier) in bodies.iter() {
        let resolved = if has_flat_ground || has_rapier {
            resolve_camera(body, camera_link, &cameras)
        } else {
            Err(InitError::MissingMover { body })
        };

        let camera = match resolved {
            Ok(camera) => camera,
            Err(err) => {
                log_error(&format!("FirstPerson init failed: {}", err));
                commands.entity(body).insert(ControllerFault(err));
                continue;
            }
        };

        // Config не отклоняем: "плохие" значения деградируют сами
        if let Err(err) = config.validate() {
            log_warning(&format!("FirstPerson config for {:?}: {}", body, err));
        }

        let mut cursor = CursorCaptureEvents {
            writer: &mut cursor_events,
            body,
        };
        let state = ControllerState::capture(camera, &mut cursor);

        log_info(&format!(
            "FirstPerson controller ready: body {:?}, camera rest y = {:.3}",
            body, state.default_camera_y
        ));

        commands.entity(body).insert((state, FrameInput::default()));
    }
}

fn resolve_camera<'q>(
    body: Entity,
    link: Option<&FirstPersonCamera>,
    cameras: &'q Query<&Transform, With<PlayerCamera>>,
) -> Result<&'q Transform, InitError> {
    let link = link.ok_or(InitError::MissingCameraLink { body })?;

    cameras
        .get(link.0)
        .map_err(|_| InitError::CameraNotFound { body, camera: link.0 })
}

/// Тик для тел с Rapier KinematicCharacterController
pub fn tick_rapier_controllers(
    mut commands: Commands,
    time: Res<Time>,
    mut bodies: Query<
        (
            Entity,
            &FirstPersonConfig,
            &mut ControllerState,
            &mut FrameInput,
            &FirstPersonCamera,
            &mut Transform,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
        ),
        Without<ControllerFault>,
    >,
    mut cameras: Query<&mut Transform, (With<PlayerCamera>, Without<ControllerState>)>,
) {
    let delta = time.delta_secs();

    for (body, config, mut state, mut input, camera, mut transform, mut character, output) in
        bodies.iter_mut()
    {
        // One-shot поля съедаем до любых guard'ов, чтобы не залипали
        let frame = *input;
        input.consume_one_shots();

        let Ok(mut camera_transform) = cameras.get_mut(camera.0) else {
            disable_lost_camera(&mut commands, body, camera.0);
            continue;
        };

        let mut mover = RapierMover {
            controller: &mut *character,
            grounded: output.map(|o| o.grounded).unwrap_or(false),
        };

        let report = controller::tick(
            config,
            &mut state,
            &frame,
            delta,
            &mut transform,
            &mut camera_transform,
            &mut mover,
        );

        log_tick(body, &report);
    }
}

/// Тик для тел на FlatGround (headless)
pub fn tick_flat_ground_controllers(
    mut commands: Commands,
    time: Res<Time>,
    mut bodies: Query<
        (
            Entity,
            &FirstPersonConfig,
            &mut ControllerState,
            &mut FrameInput,
            &FirstPersonCamera,
            &mut Transform,
            &mut FlatGround,
        ),
        (Without<KinematicCharacterController>, Without<ControllerFault>),
    >,
    mut cameras: Query<&mut Transform, (With<PlayerCamera>, Without<ControllerState>)>,
) {
    let delta = time.delta_secs();

    for (body, config, mut state, mut input, camera, mut transform, mut ground) in bodies.iter_mut() {
        let frame = *input;
        input.consume_one_shots();

        let Ok(mut camera_transform) = cameras.get_mut(camera.0) else {
            disable_lost_camera(&mut commands, body, camera.0);
            continue;
        };

        let mut mover = FlatGroundMover::new(&mut ground, transform.translation);

        let report = controller::tick(
            config,
            &mut state,
            &frame,
            delta,
            &mut transform,
            &mut camera_transform,
            &mut mover,
        );

        // Look крутил rotation, mover копил translation — сводим обратно
        transform.translation = mover.position;

        log_tick(body, &report);
    }
}

/// Камера пропала после init — та же precondition violation, что и при init
fn disable_lost_camera(commands: &mut Commands, body: Entity, camera: Entity) {
    let err = InitError::CameraNotFound { body, camera };
    log_error(&format!("FirstPerson controller disabled: {}", err));
    commands.entity(body).insert(ControllerFault(err));
}

fn log_tick(body: Entity, report: &TickReport) {
    if report.jumped {
        log(&format!("🦘 {:?} jump", body));
    }
}

/// Plugin first-person контроллера
///
/// Работает и headless (FlatGround), и с Rapier (client добавляет RapierPhysicsPlugin сам).
pub struct FirstPersonControllerPlugin;

impl Plugin for FirstPersonControllerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FirstPersonConfig>()
            .register_type::<ControllerState>()
            .register_type::<FrameInput>()
            .register_type::<FlatGround>()
            .add_event::<CursorCaptureRequested>()
            .configure_sets(
                Update,
                (FirstPersonSet::Init, FirstPersonSet::Sample, FirstPersonSet::Tick).chain(),
            )
            .add_systems(
                Update,
                (
                    init_first_person_controllers.in_set(FirstPersonSet::Init),
                    (tick_rapier_controllers, tick_flat_ground_controllers)
                        .in_set(FirstPersonSet::Tick),
                ),
            );
    }
}

/// Spawn helper: тело + camera child
///
/// Mover backend (FlatGround или Rapier) добавляет вызывающий код.
/// Возвращает (body, camera).
pub fn spawn_first_person_player(
    commands: &mut Commands,
    position: Vec3,
    config: FirstPersonConfig,
    eye_offset: Vec3,
) -> (Entity, Entity) {
    let camera = commands
        .spawn((PlayerCamera, Transform::from_translation(eye_offset)))
        .id();

    let body = commands
        .spawn((
            Player,
            Transform::from_translation(position),
            config,
            FirstPersonCamera(camera),
        ))
        .add_child(camera)
        .id();

    (body, camera)
}
